use medicart_config::Config;

use super::AppContext;

/// Strategy for displaying the resolved configuration and saved state.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = AppContext;

    async fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        println!("=== medicart Configuration ===\n");

        println!("Config file: {}", Config::config_path()?.display());
        println!("State file:  {}", ctx.store.path().display());
        println!();

        println!("Catalog:");
        match ctx.config.catalog.path.as_deref() {
            Some(path) => println!("  Source: {}", path.display()),
            None => println!("  Source: built-in"),
        }
        println!("  Medicines:  {}", ctx.catalog.medicines().len());
        println!("  Symptoms:   {}", ctx.catalog.symptoms().len());
        println!("  Categories: {}", ctx.catalog.categories().len());
        let dangling = ctx.catalog.dangling_references();
        if !dangling.is_empty() {
            println!("  Unknown medicine references: {}", dangling.len());
        }
        println!();

        let chat = &ctx.config.chat;
        println!("Chat:");
        println!(
            "  Typing delay:  {}-{}ms",
            chat.typing_delay_min_ms, chat.typing_delay_max_ms
        );
        println!("  History limit: {}", chat.history_limit);
        println!();

        let state = ctx.store.load()?;
        println!("Session:");
        match state.current_user() {
            Some(user) => println!("  Signed in: {} <{}>", user.name, user.email),
            None => println!("  Signed in: no"),
        }
        println!(
            "  Cart: {} items, {}",
            state.cart.item_count(),
            state.cart.total()
        );

        Ok(())
    }
}
