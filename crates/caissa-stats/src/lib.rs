//! Statistical helpers for the Caissa project.
//!
//! This crate contains the small, dependency-free numeric building blocks the
//! analysis layer is built on:
//!
//! - **Descriptive statistics**: min, max, mean, median, variance and
//!   standard deviation for a column of values
//! - **Linear fitting**: closed-form least-squares line through a set of
//!   points, used for the trend lines on the opening charts
//! - **Percentages**: share-of-total computation with two-decimal rounding
//!
//! # Examples
//!
//! ## Summarizing a column
//!
//! ```
//! use caissa_stats::descriptive::DescriptiveStats;
//!
//! let ratings = [1500.0, 1480.0, 1523.0, 1610.0, 1445.0];
//! let stats = DescriptiveStats::new(ratings).unwrap();
//! assert_eq!(stats.min, 1445.0);
//! assert_eq!(stats.max, 1610.0);
//! ```
//!
//! ## Fitting a trend line
//!
//! ```
//! use caissa_stats::linear_fit::LinearFit;
//!
//! let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)];
//! let fit = LinearFit::from_points(&points).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-9);
//! assert!((fit.intercept - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Computing a rounded share
//!
//! ```
//! use caissa_stats::percent::percent_of;
//!
//! assert_eq!(percent_of(2.0, 3.0), 66.67);
//! ```

pub mod descriptive;
pub mod linear_fit;
pub mod percent;
