use tui_carousel::{options::Preset, start};

fn main() -> anyhow::Result<()> {
    start(Preset::Gallery)
}
