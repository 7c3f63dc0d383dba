pub mod contrato;
pub mod imovel;
pub mod pagamento;
pub mod usuario;
