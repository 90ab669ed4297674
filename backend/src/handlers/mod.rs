//! HTTP handlers for the inventory backend

pub mod entrada;
pub mod fornecedor;
pub mod health;
pub mod movimentacao;
pub mod produto;
pub mod retirada;

pub use entrada::*;
pub use fornecedor::*;
pub use health::*;
pub use movimentacao::*;
pub use produto::*;
pub use retirada::*;
