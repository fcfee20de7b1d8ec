//! Types and traits related to temperature.

use core::fmt::{Debug, Formatter};
use core::marker::PhantomData;

/// Trait representing a temperature scale.
pub trait TemperatureScale: Send {
    const LETTER: char;
}

/// Discriminant for the _Celsius_ temperature scale.
#[derive(Clone)]
pub struct Celsius;

impl TemperatureScale for Celsius {
    const LETTER: char = 'C';
}

impl Debug for Celsius {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("°C")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Celsius {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "°C");
    }
}

/// Discriminant for the _Fahrenheit_ temperature scale.
#[derive(Clone)]
pub struct Fahrenheit;

impl TemperatureScale for Fahrenheit {
    const LETTER: char = 'F';
}

impl Debug for Fahrenheit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("°F")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fahrenheit {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "°F");
    }
}

/// A temperature value with its associated scale, carried in hundredths of
/// a degree so that compensated values stay bit-exact.
pub struct Temperature<S: TemperatureScale> {
    value: i32,
    _marker: PhantomData<S>,
}

impl<S: TemperatureScale> Temperature<S> {
    pub fn from_centidegrees(value: i32) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Hundredths of a degree.
    pub fn centidegrees(&self) -> i32 {
        self.value
    }

    /// The value in degrees.
    pub fn degrees(&self) -> f32 {
        self.value as f32 / 100.0
    }
}

impl Temperature<Celsius> {
    pub fn into_fahrenheit(self) -> Temperature<Fahrenheit> {
        Temperature::from_centidegrees(self.value * 9 / 5 + 3200)
    }
}

impl<S: TemperatureScale> Clone for Temperature<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: TemperatureScale> Copy for Temperature<S> {}

impl<S: TemperatureScale> PartialEq for Temperature<S> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<S: TemperatureScale> Eq for Temperature<S> {}

impl<S: TemperatureScale> Debug for Temperature<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}°{}",
            sign,
            (self.value / 100).abs(),
            (self.value % 100).abs(),
            S::LETTER
        )
    }
}

#[cfg(feature = "defmt")]
impl<S: TemperatureScale> defmt::Format for Temperature<S> {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}c°{}", self.value, S::LETTER)
    }
}
