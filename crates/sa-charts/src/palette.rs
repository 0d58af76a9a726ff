//! Fixed colours shared by every chart.

use crate::model::Rgb;
use sa_results::Strategy;

pub const ALEATORIA: Rgb = Rgb::new(0x2c, 0x3e, 0x50);
pub const LOCALIZADA: Rgb = Rgb::new(0xf0, 0xcb, 0x13);
pub const LIMIT: Rgb = Rgb::new(0xc4, 0x2b, 0x1a);
pub const GRID: Rgb = Rgb::new(0x80, 0x80, 0x80);

pub fn strategy_color(strategy: Strategy) -> Rgb {
    match strategy {
        Strategy::Aleatoria => ALEATORIA,
        Strategy::Localizada => LOCALIZADA,
    }
}
