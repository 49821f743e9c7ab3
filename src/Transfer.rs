/// common interface of energy transfer source terms
pub mod transfer_api;
/// spontaneous emission source terms of the total and vibrational energy equations
pub mod omega_se;
