/// physical constants in SI units
pub mod constants;
/// error type of rate-law parsing, unit resolution and mechanism assembly
pub mod kinetics_error;
/// units of fitted rate-law coefficients: parsing of unit strings such as "cm,mol,s,K"
/// and conversion factors to SI for a reaction of given order
pub mod rate_law_units;
/// eng
/// The module contains the fitted rate laws: Arrhenius, rational exponential, constant and
/// rational cubic. Every law is a small value type; laws are dispatched through the closed
/// `RateLaw` enum and built from their serialized form (`RateLawSchema`) where all units are
/// converted to SI once.
/// Example of the serialized form:
/// ```json
/// {"type": "arrhenius", "A": 7.0e21, "n": -1.6, "T": 113200.0}
/// ```
/// ----------------------------------------------------------------
/// ru
/// Модуль содержит аппроксимации констант скорости: Аррениуса, рациональную экспоненциальную,
/// постоянную и рациональную кубическую. Все единицы приводятся к СИ один раз при разборе.
pub mod rate_laws;
/// tests
pub mod rate_laws_tests;
/// which temperature of a multi-temperature state a rate coefficient is evaluated at
pub mod temperature_selector;
/// reaction categories, the table of forward/reverse temperatures and the reaction record
pub mod reaction;
/// groups of rate laws sharing kind and temperature, evaluated in one loop
pub mod rate_law_group;
/// eng
/// The module evaluates ln(kf) and ln(kb) of every reaction of a mechanism at the current
/// state of the mixture. Reactions are classified once into rate-law groups; the reverse rate
/// of a reversible reaction is obtained from the forward rate law evaluated at the reverse
/// temperature and the equilibrium constant computed from the species Gibbs energies.
/// ----------------------------------------------------------------
/// ru
/// Модуль вычисляет ln(kf) и ln(kb) всех реакций механизма при текущем состоянии смеси.
/// Обратная константа получается из прямой и константы равновесия.
pub mod rate_manager;
/// third-body efficiencies applied to rates of progress
pub mod thirdbody_manager;
/// reaction mechanism: rates of progress and species production rates
pub mod mechanism;
