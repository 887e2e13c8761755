//! Output formatting for the CLI.

use console::style;
use dropmart_commerce::prelude::*;

/// Output handler for CLI messages.
pub struct Output {
    verbose: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        println!("{} {}", style("\u{2139}").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        println!("{} {}", style("\u{2713}").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("{} {}", style("\u{26a0}").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("\u{2717}").red(), style(msg).red());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print one product line of the catalog view.
    pub fn product_row(&self, product: &Product) {
        println!(
            "  {:<8} {:<30} {:>12}  {}",
            style(product.id.as_str()).dim(),
            product.name,
            product.currency.display(product.price),
            style(&product.fulfillment_time).dim(),
        );
        if self.verbose {
            println!(
                "           {} | ships from {} | min order {} | margin {}",
                product.category.display_name(),
                product.origin,
                product.min_order,
                product.margin
            );
        }
    }
}
