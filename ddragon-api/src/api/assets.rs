use crate::{api::client::DDragonClient, models::SpellSlot};

/// Host of the champion ability preview videos, outside Data Dragon.
const ABILITY_VIDEO_HOST: &str = "https://d28xe8vt774jo5.cloudfront.net";

// Asset URLs. None of these touch the network; versioned ones read the
// cached version, which is the default one until a resolution succeeded.
impl DDragonClient {
    /// Loading screen art of the base skin. Not versioned.
    pub fn champion_splash_url(&self, id: &str) -> String {
        format!("{}/cdn/img/champion/loading/{}_0.jpg", self.base_url(), id)
    }

    pub fn champion_square_url(&self, id: &str) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.base_url(),
            self.version(),
            id
        )
    }

    /// Full splash art of a skin. Not versioned.
    pub fn skin_splash_url(&self, id: &str, skin_num: u32) -> String {
        format!(
            "{}/cdn/img/champion/splash/{}_{}.jpg",
            self.base_url(),
            id,
            skin_num
        )
    }

    pub fn passive_icon_url(&self, filename: &str) -> String {
        format!(
            "{}/cdn/{}/img/passive/{}",
            self.base_url(),
            self.version(),
            filename
        )
    }

    pub fn spell_icon_url(&self, filename: &str) -> String {
        format!(
            "{}/cdn/{}/img/spell/{}",
            self.base_url(),
            self.version(),
            filename
        )
    }

    /// Rank 1 preview video of an ability, keyed by the numeric champion key.
    pub fn spell_video_url(&self, champion_key: u32, slot: SpellSlot) -> String {
        format!(
            "{host}/champion-abilities/{key:04}/ability_{key:04}_{slot}1.webm",
            host = ABILITY_VIDEO_HOST,
            key = champion_key,
            slot = slot,
        )
    }

    pub fn profile_icon_url(&self, icon_id: u32) -> String {
        format!(
            "{}/cdn/{}/img/profileicon/{}.png",
            self.base_url(),
            self.version(),
            icon_id
        )
    }
}
