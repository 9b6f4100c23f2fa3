pub mod d400_summary;
