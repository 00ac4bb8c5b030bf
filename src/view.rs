//! Plain text renderings of the CDN data, one per command.

use ddragon_api::{
    DDragonClient,
    models::{Champion, ChampionDetail, ProfileIcon, SpellSlot},
};

use crate::error::AppError;

pub fn champion_list(client: &DDragonClient, champions: &[Champion], tag: Option<&str>) -> String {
    let lines: Vec<String> = champions
        .iter()
        .filter(|champion| {
            tag.is_none_or(|tag| champion.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
        })
        .map(|champion| {
            format!(
                "{:<16} {:<32} {}",
                champion.name,
                champion.title,
                client.champion_square_url(&champion.id)
            )
        })
        .collect();

    if lines.is_empty() {
        return "No champion found.".to_string();
    }

    lines.join("\n")
}

pub fn champion_detail(client: &DDragonClient, champion: &ChampionDetail) -> String {
    let key = champion.numeric_key();
    let video = |slot: SpellSlot| {
        key.map(|key| client.spell_video_url(key, slot))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut lines = vec![
        format!("{}, {}", champion.name, champion.title),
        format!("  art      {}", client.champion_splash_url(&champion.id)),
        format!("  icon     {}", client.champion_square_url(&champion.id)),
        String::new(),
        format!("  [P] {}", champion.passive.name),
        format!("      {}", client.passive_icon_url(&champion.passive.image.full)),
        format!("      {}", video(SpellSlot::P)),
    ];

    for (slot, spell) in champion.abilities() {
        lines.push(format!("  [{}] {}", slot, spell.name));
        lines.push(format!("      {}", client.spell_icon_url(&spell.image.full)));
        lines.push(format!("      {}", video(slot)));
    }

    if !champion.skins.is_empty() {
        lines.push(String::new());
        lines.push("  Skins".to_string());
        for skin in &champion.skins {
            lines.push(format!("  {:>4} {}", skin.num, skin.name));
        }
    }

    lines.join("\n")
}

pub fn skin_preview(
    client: &DDragonClient,
    champion: &ChampionDetail,
    skin_num: u32,
) -> Result<String, AppError> {
    let skin = champion
        .skins
        .iter()
        .find(|skin| skin.num == skin_num)
        .ok_or_else(|| AppError::SkinNotFound {
            champion_id: champion.id.clone(),
            skin_num,
        })?;

    // The CDN names the base skin "default".
    let name = if skin.num == 0 {
        champion.name.as_str()
    } else {
        skin.name.as_str()
    };

    Ok(format!(
        "{}\n  {}",
        name,
        client.skin_splash_url(&champion.id, skin.num)
    ))
}

pub fn profile_icons(client: &DDragonClient, icons: &[ProfileIcon], limit: usize) -> String {
    let mut lines: Vec<String> = icons
        .iter()
        .take(limit)
        .map(|icon| format!("{:>6} {}", icon.id, client.profile_icon_url(icon.id)))
        .collect();

    if icons.len() > limit {
        lines.push(format!("... {} more", icons.len() - limit));
    }

    lines.join("\n")
}
