pub mod usuario_repo;
pub use usuario_repo::UsuarioRepository;
pub mod imovel_repo;
pub use imovel_repo::ImovelRepository;
pub mod contrato_repo;
pub use contrato_repo::ContratoRepository;
pub mod pagamento_repo;
pub use pagamento_repo::PagamentoRepository;
