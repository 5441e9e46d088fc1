use anyhow::{Context, Result};
use page_i18n::config::Config;
use page_i18n::i18n::LanguageState;
use page_i18n::page::{Document, PageAddress};
use page_i18n::renderer::PageRenderer;
use page_i18n::storage::PreferenceStore;
use page_i18n::switcher::Switcher;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("page_i18n=info".parse()?),
        )
        .init();

    info!("Starting page localization");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Read the page document
    info!("Reading page document from {}", config.page_file);
    let page_json = std::fs::read_to_string(&config.page_file)
        .with_context(|| format!("Failed to read page document {}", config.page_file))?;
    let mut document = Document::from_json_str(&page_json)
        .with_context(|| format!("Failed to parse page document {}", config.page_file))?;

    // Step 2: Resolve the language from address, preference, and OS locale
    let address = PageAddress::parse(&config.page_url);
    let store = PreferenceStore::open(&config.preference_file);
    let browser_language = sys_locale::get_locale();
    let mut state =
        LanguageState::initialize(&config, store, address, browser_language.as_deref());

    // Step 3: Load translations (with the default-language fallback hop)
    info!("Loading translations for {}", state.current().code());
    let client = reqwest::Client::new();
    if !state.load_translations(&client, &config, state.current()).await {
        warn!("No translations loaded; page keeps its existing content");
    }

    // Step 4: Render the page
    info!("Applying translations to the page");
    let renderer = PageRenderer::new();
    renderer.apply(&mut document, state.table(), state.current());

    // Step 5: Set up the language switcher
    let switcher = Switcher::new(state.current());
    info!(
        "Switcher ready ({} languages, showing {})",
        switcher.options().len(),
        switcher.label()
    );

    // Emit the localized document
    let output = serde_json::to_string_pretty(&document)?;
    println!("{}", output);

    info!("Page localized as {}", state.current().code());
    Ok(())
}
