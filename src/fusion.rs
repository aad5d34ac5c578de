//! Sensor-fusion driver interface.
//!
//! A [`FusionDriver`] turns accelerometer, magnetometer and gyroscope
//! samples into an orientation [`Quaternion`]. The kernel only defines the
//! contract; algorithms plug in by implementing the trait. [`GyroIntegrator`]
//! is the reference implementation.
//!
//! # Example
//!
//! ```
//! use microla::{FusionDriver, GyroIntegrator, Vector};
//!
//! let mut drv = GyroIntegrator::<f64>::default();
//! drv.init(100).unwrap();
//!
//! // 0.5 rad/s about z for one second
//! let mut rate = [0.0_f64, 0.0, 0.5];
//! let gyro = Vector::new(&mut rate);
//! for _ in 0..100 {
//!     drv.update(None, None, Some(&gyro)).unwrap();
//! }
//! let q = drv.orientation();
//! assert!((q.z - 0.25_f64.sin()).abs() < 1e-9);
//! ```

use crate::error::LinalgError;
use crate::quaternion::Quaternion;
use crate::traits::FloatScalar;
use crate::vector::Vector;

/// Contract between the kernel and a sensor-fusion algorithm.
///
/// Each sensor argument is an optional 3-vector; `None` means no new sample
/// from that sensor in this step.
pub trait FusionDriver<T: FloatScalar> {
    /// Driver-specific settings.
    type Config;

    fn config(&self) -> &Self::Config;

    /// Prepare for samples arriving at `freq_hz`.
    fn init(&mut self, freq_hz: u32) -> Result<(), LinalgError>;

    /// Advance the estimate by one sample period.
    fn feed(
        &mut self,
        accel: Option<&Vector<'_, T>>,
        mag: Option<&Vector<'_, T>>,
        gyro: Option<&Vector<'_, T>>,
    ) -> Result<(), LinalgError>;

    /// Current orientation estimate.
    fn orientation(&self) -> Quaternion<T>;

    /// Called with the error whenever [`update`](Self::update) fails.
    fn on_error(&mut self, err: LinalgError) {
        log::warn!("fusion: feed failed: {}", err);
    }

    /// [`feed`](Self::feed), reporting any failure through
    /// [`on_error`](Self::on_error) before returning it.
    fn update(
        &mut self,
        accel: Option<&Vector<'_, T>>,
        mag: Option<&Vector<'_, T>>,
        gyro: Option<&Vector<'_, T>>,
    ) -> Result<(), LinalgError> {
        self.feed(accel, mag, gyro).map_err(|err| {
            self.on_error(err);
            err
        })
    }
}

/// Settings for [`GyroIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig<T> {
    /// Orientation restored by every [`init`](FusionDriver::init).
    pub initial: Quaternion<T>,
}

impl<T: FloatScalar> Default for IntegratorConfig<T> {
    fn default() -> Self {
        Self {
            initial: Quaternion::identity(),
        }
    }
}

/// Dead-reckoning driver: integrates body-frame angular rate (rad/s) into
/// the orientation. Accelerometer and magnetometer samples are ignored, so
/// the estimate drifts with gyro bias.
#[derive(Debug, Clone)]
pub struct GyroIntegrator<T> {
    config: IntegratorConfig<T>,
    q: Quaternion<T>,
    /// Sample period in seconds; zero until `init`.
    dt: T,
    errors: usize,
}

impl<T: FloatScalar> GyroIntegrator<T> {
    pub fn new(config: IntegratorConfig<T>) -> Self {
        Self {
            q: config.initial,
            config,
            dt: T::zero(),
            errors: 0,
        }
    }

    /// Number of failed updates seen by [`on_error`](FusionDriver::on_error).
    pub fn error_count(&self) -> usize {
        self.errors
    }
}

impl<T: FloatScalar> Default for GyroIntegrator<T> {
    fn default() -> Self {
        Self::new(IntegratorConfig::default())
    }
}

impl<T: FloatScalar> FusionDriver<T> for GyroIntegrator<T> {
    type Config = IntegratorConfig<T>;

    fn config(&self) -> &IntegratorConfig<T> {
        &self.config
    }

    fn init(&mut self, freq_hz: u32) -> Result<(), LinalgError> {
        if freq_hz == 0 {
            return Err(LinalgError::DivisionByZero);
        }
        self.dt = T::one() / T::from_count(freq_hz as usize);
        self.q = self.config.initial;
        log::debug!("fusion: gyro integrator at {} Hz", freq_hz);
        Ok(())
    }

    fn feed(
        &mut self,
        _accel: Option<&Vector<'_, T>>,
        _mag: Option<&Vector<'_, T>>,
        gyro: Option<&Vector<'_, T>>,
    ) -> Result<(), LinalgError> {
        if self.dt == T::zero() {
            return Err(LinalgError::DivisionByZero);
        }
        let Some(omega) = gyro else {
            return Ok(());
        };
        if omega.len() != 3 {
            return Err(LinalgError::ShapeMismatch);
        }
        let step = Quaternion::from_angular_velocity(omega, self.dt)?;
        self.q = (self.q * step).normalize()?;
        Ok(())
    }

    fn orientation(&self) -> Quaternion<T> {
        self.q
    }

    fn on_error(&mut self, err: LinalgError) {
        self.errors += 1;
        log::warn!("fusion: gyro integrator rejected sample: {}", err);
    }
}
