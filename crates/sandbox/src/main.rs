use vern::Application;

struct Sandbox {
    name: String,
}

impl Sandbox {
    fn new() -> Self {
        vern::info!("Sandbox Application Created!");
        Self {
            name: "Sandbox".to_string(),
        }
    }
}

impl Application for Sandbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self) -> anyhow::Result<()> {
        vern::debug!("{} has no frame loop yet; returning", self.name);
        Ok(())
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        vern::info!("Sandbox Application Destroyed!");
    }
}

fn create_application() -> Sandbox {
    Sandbox::new()
}

vern::entry_point!(create_application);
