//! Account commands: rename, logout and friend requests.

use anyhow::{Result, bail};
use chuni_net::ChuniNet;

pub async fn rename(client: &mut ChuniNet, name: &str) -> Result<()> {
    if !client.change_player_name(name).await? {
        bail!("The portal did not confirm the name change");
    }
    eprintln!("Player name changed to {}", name);
    Ok(())
}

pub async fn logout(client: &mut ChuniNet) -> Result<()> {
    if client.logout().await? {
        eprintln!("Logged out");
    } else {
        eprintln!("Logout request was not accepted");
    }
    Ok(())
}

pub async fn friend(client: &mut ChuniNet, code: &str) -> Result<()> {
    client.send_friend_request(code).await?;
    eprintln!("Friend request sent to {}", code);
    Ok(())
}
