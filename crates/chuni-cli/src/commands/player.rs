//! Player card and player data commands.

use anyhow::Result;
use chuni_net::ChuniNet;

use crate::output;

pub async fn profile(client: &mut ChuniNet, json: bool) -> Result<()> {
    let profile = client.authenticate().await?;
    if json {
        return output::print_json(&profile);
    }
    println!("{}", output::format_profile(&profile));
    Ok(())
}

pub async fn player_data(client: &mut ChuniNet, json: bool) -> Result<()> {
    let data = client.player_data().await?;
    if json {
        return output::print_json(&data);
    }
    println!("{}", output::format_player_data(&data));
    Ok(())
}
