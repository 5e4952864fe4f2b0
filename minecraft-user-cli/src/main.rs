use std::env;

use env_logger::Env;
use minecraft_user::{get_avatar, get_user};

#[tokio::main]
async fn main() -> Result<(), String> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .try_init()
        .map_err(|e| e.to_string())?;

    let args: Vec<String> = env::args().collect();
    let identifier = args.get(1);

    if identifier.is_none() {
        return Err("Please specify a Minecraft username or UUID as first argument.".into());
    }

    let identifier = identifier.unwrap();

    match args.get(2).map(String::as_str) {
        None => print_user(identifier).await,
        Some("--avatar") => {
            let size = match args.get(3) {
                Some(s) => s
                    .parse()
                    .map_err(|_| format!("Invalid avatar size '{s}'."))?,
                None => 64,
            };
            let path = args.get(4).map(String::as_str).unwrap_or("avatar.png");
            save_avatar(identifier, size, path).await
        }
        Some(other) => Err(format!("Unknown option '{other}'.")),
    }
}

async fn print_user(identifier: &str) -> Result<(), String> {
    let user = get_user(identifier).await.map_err(|e| e.to_string())?;

    let Some(user) = user else {
        return Err(format!("No account found for '{identifier}'."));
    };

    println!("Username: {}", user.username);
    println!("UUID:     {}", user.uuid_dashed());
    println!("          {}", user.uuid_compact());
    println!("Skin:     {}", user.textures.skin);
    if let Some(cape) = &user.textures.cape {
        println!("Cape:     {cape}");
    }

    if !user.username_history.is_empty() {
        println!("History:");
        for entry in &user.username_history {
            match entry.changed_at {
                Some(at) => println!("  {} (since {})", entry.username, at.format("%Y-%m-%d")),
                None => println!("  {} (original name)", entry.username),
            }
        }
    }

    Ok(())
}

async fn save_avatar(identifier: &str, size: u32, path: &str) -> Result<(), String> {
    let avatar = get_avatar(identifier, size)
        .await
        .map_err(|e| e.to_string())?;

    let Some(avatar) = avatar else {
        return Err(format!("No account found for '{identifier}'."));
    };

    avatar.save(path).map_err(|e| e.to_string())?;
    println!("Saved {size}x{size} avatar to {path}");

    Ok(())
}
