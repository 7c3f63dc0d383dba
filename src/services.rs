pub mod usuario_service;
pub use usuario_service::UsuarioService;
pub mod imovel_service;
pub use imovel_service::ImovelService;
pub mod contrato_service;
pub use contrato_service::ContratoService;
pub mod pagamento_service;
pub use pagamento_service::PagamentoService;
