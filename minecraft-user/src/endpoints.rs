pub(crate) const API_ROOT: &str = "https://ashcon.app";

pub(crate) fn user(root: &str, identifier: &str) -> String {
    format!("{root}/minecraft/user/{identifier}")
}

pub(crate) fn avatar(root: &str, identifier: &str, size: u32) -> String {
    format!("{root}/minecraft/avatar/{identifier}/{size}")
}
