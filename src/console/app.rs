use std::io::{self, BufRead, Write};

use crate::application::order_service::OrderService;
use crate::domain::ports::OrderRepository;
use crate::errors::AppError;

use super::render::render_orders;

/// Input that ends the session, compared case-insensitively.
pub const EXIT_COMMAND: &str = "exit";

/// Interactive loop: prompt, read a customer id, print that customer's orders.
pub struct ConsoleApp<R> {
    service: OrderService<R>,
}

impl<R: OrderRepository> ConsoleApp<R> {
    pub fn new(service: OrderService<R>) -> Self {
        Self { service }
    }

    /// Runs until the exit command is entered or `input` is exhausted.
    ///
    /// Per-request failures are printed to `output` and the loop continues;
    /// only I/O errors on `input`/`output` end it early.
    pub fn run<I, O>(&self, mut input: I, mut output: O) -> io::Result<()>
    where
        I: BufRead,
        O: Write,
    {
        let mut buf = Vec::new();

        loop {
            writeln!(
                output,
                "\nEnter customer ID (or type '{EXIT_COMMAND}' to quit):"
            )?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                log::info!("Input closed, leaving the lookup loop");
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);
            let customer_id = line.trim_end_matches(['\r', '\n']);

            if customer_id.trim().eq_ignore_ascii_case(EXIT_COMMAND) {
                writeln!(output, "Exiting the application. Goodbye!")?;
                output.flush()?;
                log::info!("Exit requested");
                return Ok(());
            }

            self.handle(customer_id, &mut output)?;
        }
    }

    fn handle<O: Write>(&self, customer_id: &str, output: &mut O) -> io::Result<()> {
        match self.service.get_orders_for_customer(customer_id) {
            Ok(orders) => render_orders(output, customer_id, &orders),
            Err(e) => {
                let err = AppError::from(e);
                log::warn!("Request for customer {customer_id:?} failed: {err}");
                writeln!(output, "{err}")
            }
        }
    }
}
