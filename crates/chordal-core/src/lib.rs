//! Chordal Core Types and Definitions
//!
//! This crate provides the foundational types for rendering Chordal chord
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS and 8-bit RGBA support ([`color::Color`])
//! - **Geometry**: Points, sizes and polar helpers ([`geometry`] module)
//! - **Draw**: Paths, stroke and text styles, and the [`draw::Canvas`]
//!   capability every rendering backend implements ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
