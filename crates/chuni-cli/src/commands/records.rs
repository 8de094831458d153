//! Record listing commands.

use anyhow::Result;
use chuni_net::ChuniNet;
use chuni_net::client::{FolderQuery, RatingList};
use chuni_net::record::ReplayToken;

use crate::output;

/// Play log, most recent first
pub async fn recent(client: &mut ChuniNet, json: bool) -> Result<()> {
    let records = client.recent_record().await?;
    if json {
        return output::print_json(&records);
    }
    for record in &records {
        println!("{}", output::format_recent(record));
    }
    Ok(())
}

pub async fn detail(client: &mut ChuniNet, idx: u32, token: &str, json: bool) -> Result<()> {
    let replay = ReplayToken {
        idx,
        token: token.to_string(),
    };
    let detail = client.detailed_recent_record(&replay).await?;
    if json {
        return output::print_json(&detail);
    }
    println!("{}", output::format_detail(&detail));
    Ok(())
}

pub async fn song(client: &mut ChuniNet, id: u32, json: bool) -> Result<()> {
    let records = client.music_record(id).await?;
    if json {
        return output::print_json(&records);
    }
    if records.is_empty() {
        eprintln!("No records for song {}", id);
    }
    for record in &records {
        println!("{}", output::format_music_record(record));
    }
    Ok(())
}

pub async fn rating_list(client: &mut ChuniNet, list: RatingList, json: bool) -> Result<()> {
    let records = client.rating_list(list).await?;
    if json {
        return output::print_json(&records);
    }
    for (rank, record) in records.iter().enumerate() {
        println!("{:>2}. {}", rank + 1, output::format_record(record));
    }
    Ok(())
}

pub async fn search(client: &mut ChuniNet, query: &FolderQuery, json: bool) -> Result<()> {
    let records = client.music_record_by_folder(query).await?;
    if json {
        return output::print_json(&records);
    }
    eprintln!("{} records", records.len());
    for record in &records {
        println!("{}", output::format_record(record));
    }
    Ok(())
}
