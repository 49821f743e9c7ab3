/// state snapshot and the thermodynamic collaborator used by the kinetics
pub mod thermo_api;
