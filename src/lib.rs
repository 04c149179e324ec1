pub mod configuration;

pub mod equation {
    pub mod univariateequation;
    pub mod monotonicinterval;
    pub mod equationerror;
    pub mod constantequation;
    pub mod linearequation;
    pub mod quadraticequation;
    pub mod equation;
}

pub mod math {
    pub mod complexformat;
}
