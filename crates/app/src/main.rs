use std::sync::Arc;

use anyhow::Context;

use storefront_app::{Shell, Storefront, StorefrontConfig};
use storefront_cart::CartEvent;
use storefront_events::InMemoryEventBus;

fn main() -> anyhow::Result<()> {
    let config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    storefront_observability::init(config.log_format);

    let catalog = config.load_catalog().context("failed to load product catalog")?;
    let bus: Arc<InMemoryEventBus<CartEvent>> = Arc::new(InMemoryEventBus::new());
    let storefront = Storefront::new(Arc::new(catalog), bus);

    let mut shell = Shell::new(storefront, config.currency_style);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell.run(stdin.lock(), stdout.lock())
}
