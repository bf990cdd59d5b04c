//! Decoders for the vendor's wire formats.

pub mod devalue;
