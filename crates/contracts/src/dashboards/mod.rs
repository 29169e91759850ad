pub mod d400_alertas;
