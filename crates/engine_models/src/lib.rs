//! # Engine Models (Analytical Layer)
//!
//! Instrument vocabulary and closed-form pricing oracles for the Monte Carlo
//! option-pricing engine:
//!
//! - [`instruments`]: the closed `(OptionStyle, OptionType)` vocabulary shared
//!   with the simulation layer
//! - [`analytical`]: Black-Scholes pricing for European vanillas, used as a
//!   validation oracle against the Monte Carlo estimate
//!
//! ## Usage Example
//!
//! ```rust
//! use engine_models::analytical::BlackScholes;
//! use engine_models::instruments::{OptionStyle, OptionType};
//!
//! let bs = BlackScholes::new(100.0_f64, 0.02, 0.2).unwrap();
//! let call = bs
//!     .price_vanilla(OptionStyle::European, OptionType::Call, 90.0, 0.5)
//!     .unwrap();
//! assert!(call > 0.0);
//!
//! // No closed form for arithmetic Asians in this engine's scope
//! assert!(bs
//!     .price_vanilla(OptionStyle::Asian, OptionType::Call, 90.0, 0.5)
//!     .is_err());
//! ```

pub mod analytical;
pub mod instruments;

pub use analytical::{AnalyticalError, BlackScholes};
pub use instruments::{OptionStyle, OptionType, ParseInstrumentError};
