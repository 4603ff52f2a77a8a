use clap::Subcommand;
use medicart_store::Cart;

use super::AppContext;

#[derive(Subcommand, Clone, Debug)]
pub enum CartAction {
    /// Show the cart (default)
    Show,
    /// Add one of a medicine
    Add { id: String },
    /// Remove a medicine entirely
    Remove { id: String },
    /// Set a quantity; 0 removes the line
    Set { id: String, quantity: u32 },
    /// Empty the cart
    Clear,
    /// Place the order
    Checkout {
        /// Delivery address
        #[arg(long)]
        address: String,
    },
}

/// Input parameters for the Cart command strategy.
pub struct CartInput {
    pub ctx: AppContext,
    pub action: CartAction,
}

/// Strategy for the shopping cart.
///
/// State is loaded before the action runs and saved after it, so the cart
/// survives between invocations.
#[derive(Debug, Clone, Copy)]
pub struct CartStrategy;

impl super::CommandStrategy for CartStrategy {
    type Input = CartInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let ctx = &input.ctx;

        ctx.with_state(|state, _| {
            let cart = &mut state.cart;
            match input.action {
                CartAction::Show => {}
                CartAction::Add { id } => {
                    let medicine = ctx.lookup_medicine(&id)?;
                    cart.add(medicine);
                    println!("{} added to cart", medicine.name);
                }
                CartAction::Remove { id } => {
                    if cart.remove(&id) {
                        println!("Removed {id}");
                    } else {
                        println!("{id} was not in the cart");
                    }
                }
                CartAction::Set { id, quantity } => cart.set_quantity(&id, quantity)?,
                CartAction::Clear => {
                    cart.clear();
                    println!("Cart cleared");
                }
                CartAction::Checkout { address } => {
                    let receipt = cart.checkout(&address)?;
                    println!("✅ Order placed successfully!");
                    println!("  Order:   {}", receipt.id);
                    println!("  Items:   {}", receipt.items.len());
                    println!("  Total:   {}", receipt.total);
                    println!("  Deliver: {}", receipt.address);
                    println!();
                    println!("Your medicines will arrive within 30 minutes.");
                    return Ok(());
                }
            }

            print_cart(cart);
            Ok(())
        })
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }

    println!();
    for item in cart.items() {
        println!(
            "  {:<4} {:<14} {:>3} x {:>8} = {:>8}",
            item.medicine.id,
            item.medicine.name,
            item.quantity,
            item.medicine.price,
            item.line_total()
        );
    }
    println!();
    println!("  {} items, total {}", cart.item_count(), cart.total());
}
