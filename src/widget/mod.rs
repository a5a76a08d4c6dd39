//! Tooltip value types shared by the layout engine and the iced widget.

mod side;

pub use side::TooltipSide;
