//! Pizzeria Simulation Library
//!
//! Core of a pizzeria management game: ingredient stock, a simulated day
//! clock and the balance that accrues across working days.

pub mod simulation;
