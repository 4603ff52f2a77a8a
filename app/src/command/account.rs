//! Demo sign-in and the profile page.

use medicart_store::{AuthDirectory, order_history, order_lines};

use super::AppContext;

pub struct LoginInput {
    pub ctx: AppContext,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy)]
pub struct LoginStrategy;

impl super::CommandStrategy for LoginStrategy {
    type Input = LoginInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let directory = AuthDirectory::demo();

        input.ctx.with_state(|state, _| {
            let user = state.login(&directory, &input.email, &input.password)?;
            println!("Welcome back, {}!", user.name);
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LogoutStrategy;

impl super::CommandStrategy for LogoutStrategy {
    type Input = AppContext;

    async fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        ctx.with_state(|state, _| {
            match state.logout() {
                Some(user) => println!("Goodbye, {}", user.name),
                None => println!("Nobody is signed in"),
            }
            Ok(())
        })
    }
}

pub struct RegisterInput {
    pub ctx: AppContext,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registers against the demo directory and signs the new user in.
///
/// The directory itself is rebuilt on every run, so only the signed-in
/// user outlives the process.
#[derive(Debug, Clone, Copy)]
pub struct RegisterStrategy;

impl super::CommandStrategy for RegisterStrategy {
    type Input = RegisterInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut directory = AuthDirectory::demo();

        input.ctx.with_state(|state, _| {
            let user = state.register(&mut directory, &input.name, &input.email, &input.password)?;
            println!("Account created. Signed in as {} ({})", user.name, user.id);
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileStrategy;

impl super::CommandStrategy for ProfileStrategy {
    type Input = AppContext;

    async fn execute(&self, ctx: Self::Input) -> anyhow::Result<()> {
        let state = ctx.store.load()?;
        let user = state.require_user()?;

        println!("=== {} ===", user.name);
        println!("  Email: {}", user.email);
        println!();

        println!("Medical history:");
        if user.medical_history.is_empty() {
            println!("  (none recorded)");
        }
        for entry in &user.medical_history {
            println!("  - {entry}");
        }
        println!();

        let orders = order_history(&user.id);
        println!("Orders:");
        if orders.is_empty() {
            println!("  You haven't placed any orders yet.");
        }
        for order in &orders {
            println!(
                "  {}  {}  {}  {}",
                order.id,
                order.date,
                order.status.as_str(),
                order.total_amount
            );
            for line in order_lines(order, &ctx.catalog) {
                println!(
                    "      {:<14} x{:<3} {:>8}",
                    line.medicine_name, line.quantity, line.line_total
                );
            }
            println!("      Delivered to {}", order.address);
        }
        Ok(())
    }
}
