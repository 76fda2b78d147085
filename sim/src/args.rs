use std::path::PathBuf;

use clap::Parser;

use crate::Profile;

#[derive(Parser, Debug, Clone)]
#[command(name = "dive-sim")]
#[command(about = "Headless dive tank for the buoyancy model", long_about = None)]
pub struct Args {
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Physics preset to run
    #[arg(long, value_enum)]
    pub profile: Option<Profile>,
    /// Constant downward weight term (px/s^2)
    #[arg(long)]
    pub weight: Option<f32>,
    /// Gravity constant multiplier
    #[arg(long)]
    pub g: Option<f32>,
    /// Lung mass change per tick at 1 atm
    #[arg(long)]
    pub inhale_rate: Option<f32>,
    /// Simulated duration in seconds
    #[arg(long)]
    pub seconds: Option<f32>,
}
