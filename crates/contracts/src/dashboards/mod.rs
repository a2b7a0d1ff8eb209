pub mod d100_regional_overview;
