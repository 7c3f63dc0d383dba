pub mod contratos;
pub mod imoveis;
pub mod pagamentos;
pub mod usuarios;
