use anyhow::Result;

fn main() -> Result<()> {
    saving_cat::tui::run_tui()
}
