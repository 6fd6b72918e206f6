use crate::domain::cart::{Cart, Quantity};
use crate::domain::menu::Menu;
use crate::domain::money::Money;
use crate::domain::order::Order;
use crate::domain::payment::{self, PaymentMethod, PaymentOutcome};
use crate::domain::user::{self, User};
use crate::error::Result;
use crate::interfaces::terminal::Terminal;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Drives one food-ordering session from start to finish.
///
/// The flow is a fixed linear sequence: collect a validated user, show the
/// menu, build the cart, total it, authorize payment, and either print the
/// order or report cancellation. Field validation failures and bad
/// selections are recovered by re-prompting; a declined payment cancels the
/// order but still ends the session normally.
pub struct Session<R, W> {
    term: Terminal<R, W>,
    menu: Menu,
    cart: Cart,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, menu: Menu) -> Self {
        Self {
            term: Terminal::new(input, output),
            menu,
            cart: Cart::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Runs the session to completion.
    ///
    /// Returns the placed order, or `None` when the cart stayed empty or
    /// payment was declined. The only hard failures are I/O errors and the
    /// input stream closing mid-session.
    pub fn run(&mut self) -> Result<Option<Order>> {
        info!(restaurant = %self.menu.restaurant, "session started");
        writeln!(self.term.writer(), "=== Welcome to the Food Ordering App ===")?;

        let user = self.collect_user()?;
        writeln!(self.term.writer(), "\n{user}")?;
        self.menu.render(self.term.writer())?;

        self.select_items()?;

        let outcome = if self.cart.is_empty() {
            writeln!(self.term.writer(), "\nCart is empty. No order placed.")?;
            info!("session ended with an empty cart");
            None
        } else {
            self.checkout(user)?
        };

        writeln!(self.term.writer(), "\nThank you for using our Food Ordering App!")?;
        Ok(outcome)
    }

    fn collect_user(&mut self) -> Result<User> {
        let name = loop {
            let name = self.term.prompt("Enter your name: ")?;
            if user::is_valid_name(&name) {
                break name;
            }
            writeln!(self.term.writer(), "Invalid name. Please enter alphabets only.")?;
        };

        let address = self.term.prompt("Enter your address: ")?;

        let mobile = loop {
            let mobile = self.term.prompt("Enter your mobile number: ")?;
            if user::is_valid_mobile(&mobile) {
                break mobile;
            }
            writeln!(
                self.term.writer(),
                "Invalid mobile number. Please enter exactly 10 numeric digits."
            )?;
        };

        User::new(&name, &address, &mobile)
    }

    /// Selection loop. `0` finishes; bad indexes and non-positive quantities
    /// are reported and discarded without ending the loop.
    fn select_items(&mut self) -> Result<()> {
        let mut label = "\nEnter item number to add to cart (0 to finish): ";
        loop {
            let raw = self.term.prompt(label)?;
            label = "Add another item (0 to finish): ";

            let choice: i64 = match raw.trim().parse() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.term.writer(), "Enter a valid choice.")?;
                    continue;
                }
            };
            if choice == 0 {
                return Ok(());
            }

            // Displayed numbers are 1-based.
            let index = choice
                .checked_sub(1)
                .and_then(|c| usize::try_from(c).ok());
            let item = match index.and_then(|i| self.menu.get(i)) {
                Some(item) => item.clone(),
                None => {
                    writeln!(self.term.writer(), "Enter a valid choice.")?;
                    continue;
                }
            };

            let raw_quantity = self.term.prompt("Enter quantity: ")?;
            let quantity = match raw_quantity
                .trim()
                .parse::<i64>()
                .ok()
                .and_then(|q| Quantity::new(q).ok())
            {
                Some(quantity) => quantity,
                None => {
                    writeln!(self.term.writer(), "Quantity must be greater than 0.")?;
                    continue;
                }
            };

            debug!(item = %item.name, quantity = quantity.value(), "added to cart");
            writeln!(self.term.writer(), "{} × {} added to cart.", item.name, quantity)?;
            self.cart.add(item, quantity);
        }
    }

    fn collect_balance(&mut self) -> Result<Money> {
        loop {
            let raw = self.term.prompt("Enter your account balance (INR): ₹")?;
            match raw.parse::<Money>() {
                Ok(balance) => return Ok(balance),
                Err(_) => writeln!(self.term.writer(), "Enter a valid amount.")?,
            }
        }
    }

    fn checkout(&mut self, user: User) -> Result<Option<Order>> {
        self.cart.render(self.term.writer())?;

        let raw = self.term.prompt("\nEnter your payment method (Card/Cash): ")?;
        let method = match raw.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(_) => {
                warn!(method = %raw.trim(), "unrecognized payment method");
                writeln!(self.term.writer(), "Invalid payment method.")?;
                writeln!(self.term.writer(), "Order Cancelled due to failed payment.")?;
                return Ok(None);
            }
        };

        let balance = match method {
            PaymentMethod::Card => self.collect_balance()?,
            PaymentMethod::Cash => Money::ZERO,
        };

        let total = self.cart.total();
        match method {
            PaymentMethod::Card => {
                writeln!(self.term.writer(), "\nProcessing payment of {total} via Card...")?;
            }
            PaymentMethod::Cash => {
                writeln!(
                    self.term.writer(),
                    "\nPayment of {total} will be made in Cash on Delivery."
                )?;
            }
        }

        match payment::authorize(method, total, balance) {
            PaymentOutcome::Approved { remaining } => {
                match method {
                    PaymentMethod::Card => {
                        writeln!(self.term.writer(), "Payment Successful!")?;
                        writeln!(self.term.writer(), "Remaining Balance: {remaining}")?;
                    }
                    PaymentMethod::Cash => {
                        writeln!(self.term.writer(), "Payment Marked as Successful.")?;
                    }
                }

                let order = Order::new(user, self.cart.entries().to_vec());
                writeln!(self.term.writer(), "{order}")?;
                self.cart.clear();
                info!(total = %total, %method, "order placed");
                Ok(Some(order))
            }
            PaymentOutcome::InsufficientFunds => {
                warn!(total = %total, "payment declined: insufficient balance");
                writeln!(self.term.writer(), "Payment Failed: Insufficient Balance.")?;
                writeln!(self.term.writer(), "Order Cancelled due to failed payment.")?;
                Ok(None)
            }
        }
    }
}
