//! Shop and inventory commands for CLI.

use clap::Subcommand;
use lifeos_core::{App, SHOP_ITEMS};

use super::flush_notices;

#[derive(Subcommand)]
pub enum ShopAction {
    /// List the catalog
    List,
    /// Buy an item by id
    Buy {
        /// Item id: freeze, neuro_stim or hacker_mode
        id: String,
    },
    /// Use an owned consumable
    Use {
        /// Item id
        id: String,
    },
    /// Show owned items, badges and the XP balance
    Inventory,
}

pub fn run(action: ShopAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        ShopAction::List => {
            println!("{}", serde_json::to_string_pretty(&SHOP_ITEMS)?);
        }
        ShopAction::Buy { id } => {
            app.buy_item(&id)?;
            flush_notices(&mut app);
            println!("Balance: {} XP", app.state().currency_xp);
        }
        ShopAction::Use { id } => {
            app.use_item(&id)?;
            flush_notices(&mut app);
        }
        ShopAction::Inventory => {
            let view = serde_json::json!({
                "items": app.state().inventory.items,
                "badges": app.state().inventory.badges,
                "currency_xp": app.state().currency_xp,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
