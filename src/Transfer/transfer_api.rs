use crate::Kinetics::kinetics_error::KineticsError;
use crate::Kinetics::mechanism::ReactionMechanism;
use crate::Thermodynamics::thermo_api::Thermodynamics;
use crate::Transfer::omega_se::{OmegaSEf, OmegaSEv, SEVibSourceData};
use enum_dispatch::enum_dispatch;
use log::error;

/// energy transfer source term evaluated from the kinetics of a mixture
#[enum_dispatch]
pub trait TransferModel {
    /// source term in J/(m^3 s) at the state of `thermo` and the molar concentrations `conc`
    fn source(&mut self, mech: &mut ReactionMechanism, thermo: &dyn Thermodynamics, conc: &[f64]) -> f64;
}

#[derive(Debug, Clone)]
#[enum_dispatch(TransferModel)]
pub enum TransferModelEnum {
    OmegaSEf(OmegaSEf),
    OmegaSEv(OmegaSEv),
}

/// builds a transfer model from its name; `vib_data` is needed by "OmegaSEv" only
pub fn create_transfer_model_by_name(
    name: &str,
    mech: &ReactionMechanism,
    thermo: &dyn Thermodynamics,
    vib_data: Option<&SEVibSourceData>,
) -> Result<TransferModelEnum, KineticsError> {
    match name {
        "OmegaSEf" => Ok(TransferModelEnum::OmegaSEf(OmegaSEf::new(mech))),
        "OmegaSEv" => {
            let empty = SEVibSourceData::default();
            let data = vib_data.unwrap_or(&empty);
            Ok(TransferModelEnum::OmegaSEv(OmegaSEv::new(mech, thermo, data)?))
        }
        _ => {
            error!("unknown transfer model '{}'", name);
            Err(KineticsError::UnknownTransferModel(name.to_owned()))
        }
    }
}
