//! European vanilla option definition.
//!
//! [`OptionSpec`] is pure data passed by value or reference; it carries no
//! lifecycle beyond a single computation call. All admissibility conditions
//! (positive spot, strike, expiry, and volatility) are enforced at
//! construction, so downstream formulas never see inputs that could divide
//! by zero or produce NaN.

use num_traits::Float;

use crate::analytical::error::AnalyticalError;

/// Payoff direction of a vanilla option.
///
/// Kept as a closed enumeration so formula dispatch stays exhaustive;
/// adding a third instrument type (e.g. a digital) is a localised change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Immutable European option specification.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Invariants
/// Spot, strike, expiry, and volatility are strictly positive; the rate may
/// be any real number (negative rates are admissible).
///
/// # Examples
/// ```
/// use vanilla_models::instruments::{OptionSpec, OptionType};
///
/// let spec = OptionSpec::new(100.0_f64, 100.0, 1.0, 0.2, 0.05, OptionType::Call).unwrap();
/// assert_eq!(spec.spot(), 100.0);
///
/// // Non-positive volatility is rejected at construction
/// assert!(OptionSpec::new(100.0_f64, 100.0, 1.0, 0.0, 0.05, OptionType::Call).is_err());
/// ```
// Serialize only: deserialisation would bypass the validated constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionSpec<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Strike price (K)
    strike: T,
    /// Time to expiry in years (T)
    expiry: T,
    /// Volatility (σ, annualised)
    volatility: T,
    /// Risk-free interest rate (r, continuously compounded)
    rate: T,
    /// Call or put
    option_type: OptionType,
}

impl<T: Float> OptionSpec<T> {
    /// Creates a validated option specification.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if `spot <= 0`
    /// - `AnalyticalError::InvalidStrike` if `strike <= 0`
    /// - `AnalyticalError::InvalidExpiry` if `expiry <= 0`
    /// - `AnalyticalError::InvalidVolatility` if `volatility <= 0`
    ///
    /// # Examples
    /// ```
    /// use vanilla_models::instruments::{OptionSpec, OptionType};
    ///
    /// let put = OptionSpec::new(95.0_f64, 100.0, 0.5, 0.25, -0.01, OptionType::Put);
    /// assert!(put.is_ok());
    /// ```
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        volatility: T,
        rate: T,
        option_type: OptionType,
    ) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }

        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(0.0),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            volatility,
            rate,
            option_type,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns a copy with the spot replaced, re-validated.
    ///
    /// Used by finite-difference bumps; every other field is held fixed.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidSpot` if the bumped spot is non-positive.
    pub fn with_spot(&self, spot: T) -> Result<Self, AnalyticalError> {
        Self::new(
            spot,
            self.strike,
            self.expiry,
            self.volatility,
            self.rate,
            self.option_type,
        )
    }

    /// Returns a copy with the volatility replaced, re-validated.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidVolatility` if the bumped volatility is
    /// non-positive.
    pub fn with_volatility(&self, volatility: T) -> Result<Self, AnalyticalError> {
        Self::new(
            self.spot,
            self.strike,
            self.expiry,
            volatility,
            self.rate,
            self.option_type,
        )
    }

    /// Returns a copy with the option type replaced.
    ///
    /// Infallible: the numeric fields are unchanged and already validated.
    #[inline]
    pub fn with_option_type(&self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..*self
        }
    }

    /// Intrinsic value at the current spot: `max(S-K, 0)` for a call,
    /// `max(K-S, 0)` for a put.
    #[inline]
    pub fn intrinsic(&self) -> T {
        let zero = T::zero();
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(zero),
            OptionType::Put => (self.strike - self.spot).max(zero),
        }
    }
}
