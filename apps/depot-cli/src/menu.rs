//! # Store Menu
//!
//! The numbered text menu over a [`Store`].
//!
//! ## Menu Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. List all products ──► Store::active_products ──► show() per line    │
//! │                                                                         │
//! │  2. Show total amount ──► Store::total_quantity                         │
//! │                                                                         │
//! │  3. Make an order ──────► collect (number, quantity) pairs              │
//! │                             │  empty line finishes                      │
//! │                             ▼                                           │
//! │                          Store::order ──► total or error message        │
//! │                                                                         │
//! │  4. Quit (or end of input)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The menu never aborts on bad input or refused orders. It only returns an
//! error when reading or writing the terminal fails.

use std::io::{self, BufRead, Write};

use depot_core::{OrderLine, ProductId, Store};
use tracing::{debug, info, warn};

/// Text menu over any input/output pair.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Menu { input, output }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self, store: &mut Store) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Please choose a number: ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };

            debug!(choice = %choice, "Menu choice");
            match choice.as_str() {
                "1" => self.list_products(store)?,
                "2" => self.show_total_quantity(store)?,
                "3" => self.make_order(store)?,
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    /// Hands back the input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "   Store Menu")?;
        writeln!(self.output, "   ----------")?;
        writeln!(self.output, "1. List all products in store")?;
        writeln!(self.output, "2. Show total amount in store")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")
    }

    fn list_products(&mut self, store: &Store) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Available products:")?;
        for product in store.active_products() {
            writeln!(self.output, "{}", product.show())?;
        }
        Ok(())
    }

    fn show_total_quantity(&mut self, store: &Store) -> io::Result<()> {
        writeln!(self.output)?;
        match store.total_quantity() {
            Ok(total) => writeln!(self.output, "Total quantity in store: {total}"),
            Err(err) => {
                warn!(error = %err, "Total quantity unavailable");
                writeln!(self.output, "Error counting stock: {err}")
            }
        }
    }

    fn make_order(&mut self, store: &mut Store) -> io::Result<()> {
        // Numbering is fixed when the order starts.
        let listed: Vec<ProductId> = store.active_products().iter().map(|p| p.id()).collect();

        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter the number of the product and quantity to order."
        )?;
        for (i, product) in store.active_products().iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, product.show())?;
        }

        let shopping_list = self.collect_lines(&listed)?;

        match store.order(&shopping_list) {
            Ok(total) => {
                info!(lines = shopping_list.len(), total = %total, "Order placed");
                writeln!(self.output)?;
                writeln!(self.output, "Order placed. Total cost: {total} dollars.")
            }
            Err(err) => {
                warn!(lines = shopping_list.len(), error = %err, "Order failed");
                writeln!(self.output, "Error placing order: {err}")
            }
        }
    }

    fn collect_lines(&mut self, listed: &[ProductId]) -> io::Result<Vec<OrderLine>> {
        let mut shopping_list = Vec::new();

        loop {
            let Some(entry) = self.prompt("Product number (or press Enter to finish): ")? else {
                break;
            };
            if entry.is_empty() {
                break;
            }

            let number: usize = match entry.parse() {
                Ok(number) => number,
                Err(err) => {
                    writeln!(self.output, "Invalid input: {err}")?;
                    continue;
                }
            };
            let Some(&product_id) = number.checked_sub(1).and_then(|i| listed.get(i)) else {
                writeln!(self.output, "Invalid product number.")?;
                continue;
            };

            let Some(quantity) = self.prompt("Quantity: ")? else {
                break;
            };
            match quantity.parse::<i64>() {
                Ok(quantity) => shopping_list.push(OrderLine::new(product_id, quantity)),
                Err(err) => writeln!(self.output, "Invalid input: {err}")?,
            }
        }

        Ok(shopping_list)
    }

    /// Writes `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::{Money, Product};
    use std::io::Cursor;

    fn store() -> Store {
        Store::new(vec![
            Product::new("Widget", Money::from_major_minor(10, 0), 5).unwrap(),
            Product::new("Gadget", Money::from_cents(250), 2).unwrap(),
        ])
    }

    fn run(store: &mut Store, input: &str) -> String {
        let mut menu = Menu::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        menu.run(store).unwrap();
        let (_, output) = menu.into_parts();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_quit() {
        let output = run(&mut store(), "4\n");
        assert!(output.starts_with("   Store Menu\n   ----------\n1. List all products in store\n"));
        assert!(output.ends_with("Please choose a number: Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_quits() {
        let output = run(&mut store(), "");
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice() {
        let output = run(&mut store(), "9\n4\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_list_products_skips_inactive() {
        let mut store = store();
        store.add_product(Product::new("Pager", Money::from_cents(999), 0).unwrap());

        let output = run(&mut store, "1\n4\n");
        assert!(output.contains(
            "\nAvailable products:\nWidget, Price: 10.00, Quantity: 5\nGadget, Price: 2.50, Quantity: 2\n"
        ));
        assert!(!output.contains("Pager"));
    }

    #[test]
    fn test_total_quantity() {
        let output = run(&mut store(), "2\n4\n");
        assert!(output.contains("\nTotal quantity in store: 7\n"));
    }

    #[test]
    fn test_total_quantity_overflow_is_reported() {
        let mut store = Store::new(vec![
            Product::new("Bulk", Money::from_cents(1), i64::MAX).unwrap(),
            Product::new("Single", Money::from_cents(1), 1).unwrap(),
        ]);
        let output = run(&mut store, "2\n4\n");
        assert!(output.contains("\nError counting stock: Total quantity in store overflows\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_successful_order() {
        let mut store = store();
        let output = run(&mut store, "3\n1\n5\n2\n1\n\n4\n");

        assert!(output.contains("1. Widget, Price: 10.00, Quantity: 5\n2. Gadget, Price: 2.50, Quantity: 2\n"));
        assert!(output.contains("Order placed. Total cost: 52.50 dollars."));
        assert_eq!(store.total_quantity().unwrap(), 1);
        assert_eq!(store.active_products().len(), 1);
    }

    #[test]
    fn test_failed_order_keeps_earlier_lines() {
        let mut store = store();
        let output = run(&mut store, "3\n1\n2\n2\n3\n\n4\n");

        assert!(output.contains(
            "Error placing order: Order line 2 (Gadget): Not enough stock for Gadget: available 2, requested 3"
        ));
        assert_eq!(store.total_quantity().unwrap(), 5);
    }

    #[test]
    fn test_bad_entries_are_reprompted() {
        let mut store = store();
        let output = run(&mut store, "3\nabc\n0\n7\n2\nxyz\n2\n1\n\n4\n");

        assert!(output.contains("Invalid input: invalid digit found in string"));
        assert_eq!(output.matches("Invalid product number.").count(), 2);
        assert!(output.contains("Order placed. Total cost: 2.50 dollars."));
        assert_eq!(store.total_quantity().unwrap(), 6);
    }

    #[test]
    fn test_empty_order_costs_nothing() {
        let output = run(&mut store(), "3\n\n4\n");
        assert!(output.contains("Order placed. Total cost: 0.00 dollars."));
    }

    #[test]
    fn test_negative_quantity_is_refused_by_store() {
        let mut store = store();
        let output = run(&mut store, "3\n1\n-2\n\n4\n");
        assert!(output.contains("Error placing order: Order line 1 (Widget): Quantity must be positive, got -2"));
        assert_eq!(store.total_quantity().unwrap(), 7);
    }
}
