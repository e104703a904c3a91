//! The rule set that turns the Coreus `index.html` into `coreus-onefile.html`.

use crate::error::Result;
use crate::rules::rewriter::{Rewriter, Rule};

/// GitHub Pages host for game and tool assets.
pub const ASSET_HOST: &str = "https://noodlelover1.github.io/coreus-assets/";

/// jsDelivr mirror of the repository behind [`ASSET_HOST`], used for tool
/// thumbnails so they resolve separately from game thumbnails.
pub const CDN_HOST: &str = "https://cdn.jsdelivr.net/gh/noodlelover1/coreus-assets@main/";

/// Where the latest single-file build is published.
pub const ONEFILE_RELEASE_URL: &str = "https://noodlelover1.github.io/coreus/coreus-onefile.html";

/// Shared by the tool and game cards; only textual order tells them apart.
const IMAGE_SRC: &str = r#"src="./assets/${imagePath}""#;

// Indentation must match index.html exactly.
const MIRROR_HOSTS: &str = "const mirrorHosts = [
                'https://coreus-assets-x44fhv591.onrender.com/',
                'https://coreus-assets-7hb65sx0h.onrender.com/',
                'https://coreus-assets-g6kx36vv0.vercel.app/'
            ];";

const MIRROR_HOSTS_WITH_PAGES: &str = "const mirrorHosts = [
                'https://noodlelover1.github.io/coreus-assets/',
                'https://coreus-assets-x44fhv591.onrender.com/',
                'https://coreus-assets-7hb65sx0h.onrender.com/',
                'https://coreus-assets-g6kx36vv0.vercel.app/'
            ];";

const GAME_BACKEND_DEFAULT: &str =
	"let gameBackend = localStorage.getItem('gameBackend') || 'auto';";

const AUTO_OPTION: &str = r#"<option value="auto">Auto fallback</option>"#;

/// The live-deployment notice, tolerant of link attributes and spacing.
const DEPLOYMENT_NOTICE: &str = r"This is a deployment of coreus not the singlefile version, get it here:\s*(?i:<a\b[^>]*>)\s*Download\s*(?i:</a>)";

/// The built-in rules, in application order.
pub fn builtin_rules() -> Result<Vec<Rule>> {
	Ok(vec![
		// Asset paths
		Rule::literal(
			"games-json",
			"./assets/games.json",
			format!("{ASSET_HOST}games.json"),
		),
		Rule::literal(
			"tools-json",
			"./assets/tools.json",
			format!("{ASSET_HOST}tools.json"),
		),
		Rule::literal(
			"game-launch-path",
			"`./assets/${gamePath}`",
			format!("`{ASSET_HOST}${{gamePath}}`"),
		),
		Rule::literal(
			"tool-launch-path",
			"`./assets/${toolPath}`",
			format!("`{ASSET_HOST}${{toolPath}}`"),
		),
		Rule::literal(
			"tool-image",
			IMAGE_SRC,
			format!(r#"src="{CDN_HOST}${{imagePath}}""#),
		)
		.first(1),
		Rule::literal(
			"game-image",
			IMAGE_SRC,
			format!(r#"src="{ASSET_HOST}${{imagePath}}""#),
		)
		.first(1),
		// Backend hosts
		Rule::literal("mirror-hosts", MIRROR_HOSTS, MIRROR_HOSTS_WITH_PAGES),
		Rule::literal(
			"game-backend-default",
			GAME_BACKEND_DEFAULT,
			format!("let gameBackend = localStorage.getItem('gameBackend') || '{ASSET_HOST}';"),
		),
		Rule::literal(
			"game-backend-option",
			AUTO_OPTION,
			format!(r#"<option value="{ASSET_HOST}">GitHub Pages</option>"#),
		)
		.first(1),
		// About section
		Rule::pattern(
			"deployment-notice",
			DEPLOYMENT_NOTICE,
			format!(
				r#"You are running the singlefile version of Coreus. Get the latest release here : <a href="{ONEFILE_RELEASE_URL}" download=coreus-onefile.html style="color: var(--accent-color);">Download</a>"#
			),
		)?
		.first(1),
	])
}

/// A [`Rewriter`] loaded with [`builtin_rules`].
pub fn builtin_rewriter() -> Result<Rewriter> {
	builtin_rules().map(Rewriter::new)
}
