//! Third-party audio player embed: URL building and sizing.
//!
//! The player ships at a fixed 480x166 and is scaled down to its slide with
//! a CSS transform; one shared scale factor (active slide width / 480) is
//! applied to every viewport rather than measuring each one.

/// Native width of the embedded player, the rescale reference.
pub const PLAYER_WIDTH: f64 = 480.0;

/// Native height of the embedded player.
pub const PLAYER_HEIGHT: u32 = 166;

const PLAYER_BASE: &str = "https://w.soundcloud.com/player/";

/// Fixed display options appended to every player URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedOptions {
    pub color: String,
    pub auto_play: bool,
    pub hide_related: bool,
    pub show_comments: bool,
    pub show_user: bool,
    pub show_reposts: bool,
    pub show_teaser: bool,
    pub visual: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            color: "#EE8F00".to_string(),
            auto_play: false,
            hide_related: true,
            show_comments: false,
            show_user: true,
            show_reposts: false,
            show_teaser: false,
            visual: false,
        }
    }
}

/// Build the iframe src for one entry's resource locator.
pub fn player_src(resource_url: &str, options: &EmbedOptions) -> String {
    format!(
        "{PLAYER_BASE}?url={url}&color={color}&auto_play={auto_play}&hide_related={hide_related}\
         &show_comments={show_comments}&show_user={show_user}&show_reposts={show_reposts}\
         &show_teaser={show_teaser}&visual={visual}",
        url = urlencoding::encode(resource_url),
        color = urlencoding::encode(&options.color),
        auto_play = options.auto_play,
        hide_related = options.hide_related,
        show_comments = options.show_comments,
        show_user = options.show_user,
        show_reposts = options.show_reposts,
        show_teaser = options.show_teaser,
        visual = options.visual,
    )
}

/// Shared scale factor for all player viewports, from the active slide's
/// container width.
pub fn player_scale(container_width: f64) -> f64 {
    container_width / PLAYER_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_src_encodes_locator_and_options() {
        let src = player_src(
            "https://soundcloud.com/artist/track-one",
            &EmbedOptions::default(),
        );
        assert!(src.starts_with("https://w.soundcloud.com/player/?url=https%3A%2F%2Fsoundcloud.com%2Fartist%2Ftrack-one"));
        assert!(src.contains("&color=%23EE8F00"));
        assert!(src.contains("&auto_play=false"));
        assert!(src.contains("&hide_related=true"));
        assert!(src.contains("&show_comments=false"));
        assert!(src.contains("&visual=false"));
    }

    #[test]
    fn test_player_scale_is_width_over_reference() {
        assert_eq!(player_scale(480.0), 1.0);
        assert_eq!(player_scale(240.0), 0.5);
        assert_eq!(player_scale(360.0), 0.75);
    }
}
