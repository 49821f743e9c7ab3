/// universal gas constant, J/(mol·K)
pub const RU: f64 = 8.31446261815324;
/// Avogadro number, 1/mol
pub const NA: f64 = 6.02214076e23;
/// Boltzmann constant, J/K
pub const KB: f64 = 1.380649e-23;
/// elementary charge, C (also J per eV)
pub const QE: f64 = 1.602176634e-19;
/// standard pressure used for concentration based equilibrium constants, Pa
pub const ONEATM: f64 = 101325.0;
/// calorie, J
pub const CAL: f64 = 4.184;
