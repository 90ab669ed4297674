//! Business logic services for the inventory backend

pub mod entrada;
pub mod estoque;
pub mod fornecedor;
pub mod movimentacao;
pub mod produto;
pub mod retirada;

pub use entrada::EntradaService;
pub use estoque::EstoqueService;
pub use fornecedor::FornecedorService;
pub use movimentacao::MovimentacaoService;
pub use produto::ProdutoService;
pub use retirada::RetiradaService;
