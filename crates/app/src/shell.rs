//! Line-oriented storefront shell.
//!
//! One command per line; see [`HELP`]. Parse failures are reported back to
//! the user and never end the session.

use std::io::{BufRead, Write};

use thiserror::Error;

use storefront_cart::CartEvent;
use storefront_core::{DomainError, ProductId};
use storefront_events::{EventBus, Subscription};

use crate::config::CurrencyStyle;
use crate::notification::{CartControl, Notification};
use crate::render::{render_cart, render_categories, render_products};
use crate::session::{DispatchError, Storefront};

pub const HELP: &str = "\
commands:
  list                   show products matching the current filters
  categories             show categories (* marks the active one)
  search <text>          filter by name (empty text clears the search)
  category <name|all>    filter by category
  reset                  clear search and category
  add <id> [qty]         add units to the cart (default 1)
  set <id> <qty>         set the quantity for a product (0 removes it)
  inc <id>               one more unit of a product
  dec <id>               one unit fewer of a product
  qty <id> <qty>         change the quantity of a cart line (0 removes it)
  remove <id>            remove a product from the cart
  clear                  empty the cart
  cart                   show the cart
  help                   show this message
  quit                   leave
";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command {0:?} (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    InvalidProductId(#[from] DomainError),

    #[error("invalid quantity {0:?}: expected a whole number")]
    InvalidQuantity(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Categories,
    Search(String),
    Category(Option<String>),
    Reset,
    Add(ProductId, i64),
    Set(ProductId, i64),
    Increment(ProductId),
    Decrement(ProductId),
    LineQuantity(ProductId, i64),
    Remove(ProductId),
    Clear,
    Cart,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, ShellError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        let command = match word.to_ascii_lowercase().as_str() {
            "list" | "ls" => Self::List,
            "categories" => Self::Categories,
            "search" => Self::Search(rest.to_string()),
            "category" => {
                if rest.is_empty() {
                    return Err(ShellError::MissingArgument {
                        command: "category",
                        argument: "a category name or `all`",
                    });
                }
                Self::Category(Some(rest.to_string()))
            }
            "reset" => Self::Reset,
            "add" => {
                let id = product_arg("add", args.next())?;
                let qty = match args.next() {
                    Some(raw) => quantity_arg(raw)?,
                    None => 1,
                };
                Self::Add(id, qty)
            }
            "set" => {
                let id = product_arg("set", args.next())?;
                let raw = args.next().ok_or(ShellError::MissingArgument {
                    command: "set",
                    argument: "a quantity",
                })?;
                Self::Set(id, quantity_arg(raw)?)
            }
            "qty" => {
                let id = product_arg("qty", args.next())?;
                let raw = args.next().ok_or(ShellError::MissingArgument {
                    command: "qty",
                    argument: "a quantity",
                })?;
                Self::LineQuantity(id, quantity_arg(raw)?)
            }
            "inc" => Self::Increment(product_arg("inc", args.next())?),
            "dec" => Self::Decrement(product_arg("dec", args.next())?),
            "remove" | "rm" => Self::Remove(product_arg("remove", args.next())?),
            "clear" => Self::Clear,
            "cart" => Self::Cart,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(ShellError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }

    /// Which storefront control this command stands in for.
    pub fn control(&self) -> CartControl {
        match self {
            Self::Set(..) | Self::Increment(_) | Self::Decrement(_) => CartControl::ProductCard,
            Self::LineQuantity(..) | Self::Remove(_) => CartControl::CartLine,
            _ => CartControl::AddButton,
        }
    }
}

fn product_arg(command: &'static str, raw: Option<&str>) -> Result<ProductId, ShellError> {
    let raw = raw.ok_or(ShellError::MissingArgument {
        command,
        argument: "a product id",
    })?;
    Ok(raw.parse::<ProductId>()?)
}

fn quantity_arg(raw: &str) -> Result<i64, ShellError> {
    raw.parse::<i64>()
        .map_err(|_| ShellError::InvalidQuantity(raw.to_string()))
}

/// Text to show after one input line, and whether to stop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellReply {
    pub text: String,
    pub quit: bool,
}

impl ShellReply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

pub struct Shell<B> {
    storefront: Storefront<B>,
    notifications: Subscription<CartEvent>,
    style: CurrencyStyle,
}

impl<B> Shell<B>
where
    B: EventBus<CartEvent>,
{
    pub fn new(storefront: Storefront<B>, style: CurrencyStyle) -> Self {
        let notifications = storefront.subscribe();
        Self {
            storefront,
            notifications,
            style,
        }
    }

    pub fn storefront(&self) -> &Storefront<B> {
        &self.storefront
    }

    /// Parse and run one line of input.
    pub fn handle_line(&mut self, line: &str) -> Result<ShellReply, DispatchError> {
        match ShellCommand::parse(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(ShellReply::default()),
            Err(err) => {
                tracing::warn!(input = line, error = %err, "rejected shell input");
                Ok(ShellReply::text(format!("error: {err}\n")))
            }
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<ShellReply, DispatchError> {
        let style = self.style;
        let control = command.control();
        let store = &mut self.storefront;

        let mut reply = match command {
            ShellCommand::List => ShellReply::text(render_products(&store.visible_products(), store.cart(), style)),
            ShellCommand::Categories => ShellReply::text(render_categories(
                &store.categories(),
                store.criteria().selected_category(),
            )),
            ShellCommand::Search(text) => {
                store.set_search_text(text);
                ShellReply::text(render_products(&store.visible_products(), store.cart(), style))
            }
            ShellCommand::Category(category) => {
                store.set_category(category);
                ShellReply::text(render_products(&store.visible_products(), store.cart(), style))
            }
            ShellCommand::Reset => {
                store.reset_filters();
                ShellReply::text(render_products(&store.visible_products(), store.cart(), style))
            }
            ShellCommand::Add(id, qty) => self.cart_change(id, |s| s.add_item(id, qty))?,
            ShellCommand::Set(id, qty) => self.cart_change(id, |s| s.set_product_quantity(id, qty))?,
            ShellCommand::Increment(id) => self.cart_change(id, |s| s.increment(id))?,
            ShellCommand::Decrement(id) => self.cart_change(id, |s| s.decrement(id))?,
            ShellCommand::LineQuantity(id, qty) => self.cart_change(id, |s| s.update_quantity(id, qty))?,
            ShellCommand::Remove(id) => self.cart_change(id, |s| s.remove_item(id))?,
            ShellCommand::Clear => {
                store.clear_cart()?;
                ShellReply::default()
            }
            ShellCommand::Cart => ShellReply::text(render_cart(store.cart(), style)),
            ShellCommand::Help => ShellReply::text(HELP),
            ShellCommand::Quit => ShellReply {
                text: String::new(),
                quit: true,
            },
        };

        for event in self.notifications.drain() {
            reply.text.push_str(&format!("> {}\n", Notification::from_event(&event, control)));
        }
        Ok(reply)
    }

    /// Run a cart operation; say so when it changed nothing.
    fn cart_change(
        &mut self,
        product_id: ProductId,
        op: impl FnOnce(&mut Storefront<B>) -> Result<Vec<CartEvent>, DispatchError>,
    ) -> Result<ShellReply, DispatchError> {
        let events = op(&mut self.storefront)?;
        if !events.is_empty() {
            return Ok(ShellReply::default());
        }

        let text = if self.storefront.catalog().get_by_id(product_id).is_none() {
            format!("no product with id {product_id}\n")
        } else {
            "cart unchanged\n".to_string()
        };
        Ok(ShellReply::text(text))
    }

    /// Read commands from `input` until EOF or `quit`, writing replies to `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        writeln!(output, "Product Search & Order (type `help` for commands)")?;
        output.write_all(render_products(&self.storefront.visible_products(), self.storefront.cart(), self.style).as_bytes())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let reply = match self.handle_line(&line) {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(error = %err, "cart event not delivered");
                    ShellReply::text(format!("warning: {err}\n"))
                }
            };
            output.write_all(reply.text.as_bytes())?;
            output.flush()?;
            if reply.quit {
                break;
            }
        }

        tracing::info!(
            items = self.storefront.cart().total_items(),
            total = %self.storefront.cart().total_price(),
            "storefront session ended"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use storefront_catalog::Catalog;
    use storefront_events::InMemoryEventBus;

    fn shell() -> Shell<Arc<InMemoryEventBus<CartEvent>>> {
        let store = Storefront::new(Arc::new(Catalog::sample()), Arc::new(InMemoryEventBus::new()));
        Shell::new(store, CurrencyStyle::Alt)
    }

    #[test]
    fn parses_commands() {
        assert_eq!(ShellCommand::parse("  ").unwrap(), None);
        assert_eq!(ShellCommand::parse("LIST").unwrap(), Some(ShellCommand::List));
        assert_eq!(
            ShellCommand::parse("search  vitamin c ").unwrap(),
            Some(ShellCommand::Search("vitamin c".to_string()))
        );
        assert_eq!(ShellCommand::parse("search").unwrap(), Some(ShellCommand::Search(String::new())));
        assert_eq!(
            ShellCommand::parse("category Pain Relief").unwrap(),
            Some(ShellCommand::Category(Some("Pain Relief".to_string())))
        );
        assert_eq!(
            ShellCommand::parse("add 2").unwrap(),
            Some(ShellCommand::Add(ProductId::new(2), 1))
        );
        assert_eq!(
            ShellCommand::parse("add 2 -3").unwrap(),
            Some(ShellCommand::Add(ProductId::new(2), -3))
        );
        assert_eq!(
            ShellCommand::parse("set 4 0").unwrap(),
            Some(ShellCommand::Set(ProductId::new(4), 0))
        );
        assert_eq!(ShellCommand::parse("rm 1").unwrap(), Some(ShellCommand::Remove(ProductId::new(1))));
        assert_eq!(
            ShellCommand::parse("qty 3 5").unwrap(),
            Some(ShellCommand::LineQuantity(ProductId::new(3), 5))
        );
        assert_eq!(ShellCommand::parse("exit").unwrap(), Some(ShellCommand::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            ShellCommand::parse("checkout").unwrap_err(),
            ShellError::UnknownCommand("checkout".to_string())
        );
        assert!(matches!(
            ShellCommand::parse("add").unwrap_err(),
            ShellError::MissingArgument { command: "add", .. }
        ));
        assert!(matches!(
            ShellCommand::parse("set 1").unwrap_err(),
            ShellError::MissingArgument { command: "set", .. }
        ));
        assert!(matches!(
            ShellCommand::parse("add zero").unwrap_err(),
            ShellError::InvalidProductId(DomainError::InvalidId(_))
        ));
        assert_eq!(
            ShellCommand::parse("add 1 lots").unwrap_err(),
            ShellError::InvalidQuantity("lots".to_string())
        );
        assert!(matches!(
            ShellCommand::parse("qty 2").unwrap_err(),
            ShellError::MissingArgument { command: "qty", .. }
        ));
        assert!(matches!(
            ShellCommand::parse("category").unwrap_err(),
            ShellError::MissingArgument { command: "category", .. }
        ));
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut shell = shell();
        let reply = shell.handle_line("frobnicate").unwrap();
        assert!(reply.text.starts_with("error: unknown command"));
        assert!(!reply.quit);
    }

    #[test]
    fn cart_changes_echo_notifications() {
        let mut shell = shell();

        let reply = shell.handle_line("add 1 2").unwrap();
        assert_eq!(reply.text, "> Added to cart: Paracetamol 500mg (2) added to cart.\n");

        let reply = shell.handle_line("inc 1").unwrap();
        assert_eq!(reply.text, "> Quantity updated: Paracetamol 500mg quantity increased to 3.\n");

        let reply = shell.handle_line("set 1 0").unwrap();
        assert_eq!(reply.text, "> Removed from cart: Paracetamol 500mg has been removed from your cart.\n");
    }

    #[test]
    fn wording_follows_the_control_used() {
        let mut shell = shell();

        let reply = shell.handle_line("set 3 1").unwrap();
        assert_eq!(reply.text, "> Added to cart: Vitamin C 1000mg (1) added to cart.\n");

        let reply = shell.handle_line("qty 3 5").unwrap();
        assert_eq!(reply.text, "> Quantity updated: Vitamin C 1000mg quantity updated to 5.\n");

        let reply = shell.handle_line("dec 3").unwrap();
        assert_eq!(reply.text, "> Quantity updated: Vitamin C 1000mg quantity decreased to 4.\n");

        let reply = shell.handle_line("add 4").unwrap();
        assert_eq!(reply.text, "> Added to cart: Cetirizine 10mg has been added to your cart.\n");
    }

    #[test]
    fn help_lists_one_command_per_line() {
        assert!(HELP.lines().any(|line| line.trim_start().starts_with("inc <id> ")));
        assert!(HELP.lines().any(|line| line.trim_start().starts_with("dec <id> ")));
        assert!(!HELP.contains(" / "));
    }

    #[test]
    fn noop_cart_changes_explain_themselves() {
        let mut shell = shell();
        assert_eq!(shell.handle_line("add 42").unwrap().text, "no product with id 42\n");
        assert_eq!(shell.handle_line("remove 3").unwrap().text, "cart unchanged\n");
    }

    #[test]
    fn filters_render_matching_products() {
        let mut shell = shell();
        let reply = shell.handle_line("search 500mg").unwrap();
        assert_eq!(reply.text.lines().count(), 2);

        let reply = shell.handle_line("category Antibiotic").unwrap();
        assert_eq!(reply.text, "[2] Amoxicillin 500mg [Rx] (Antibiotic) 45.000 đ\n");

        let reply = shell.handle_line("category all").unwrap();
        assert_eq!(reply.text.lines().count(), 2);
        assert_eq!(shell.storefront().criteria().selected_category(), None);

        let reply = shell.handle_line("reset").unwrap();
        assert_eq!(reply.text.lines().count(), 4);
    }

    #[test]
    fn run_stops_at_quit() {
        let mut shell = shell();
        let input = b"add 3\ncart\nquit\nadd 1\n" as &[u8];
        let mut output = Vec::new();

        shell.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Shopping Cart (1 item)"));
        assert!(text.contains("Grand Total: 30.000 đ"));
        assert!(shell.storefront().cart().get_item(ProductId::new(1)).is_none());
    }
}
