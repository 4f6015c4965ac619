use anyhow::Result;

/// Application contract implemented by client programs.
///
/// Construction happens in the client's factory and teardown is the
/// implementor's `Drop`; the engine owns the value in between.
pub trait Application {
    /// Name used by the entry point in log lines and error context.
    fn name(&self) -> &str {
        "Vern Application"
    }

    /// Runs the application. There is no frame loop yet, so the default
    /// returns immediately.
    fn run(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<A> Application for Box<A>
where
    A: Application + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn run(&mut self) -> Result<()> {
        (**self).run()
    }
}
