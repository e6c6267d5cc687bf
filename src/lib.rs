pub mod configuration;

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod gaussiancurve;
        pub mod point2d;
    }
    pub mod integration;
}

pub mod overlap {
    pub mod overlaperror;
    pub mod sampledomain;
    pub mod sampledcurve;
    pub mod combinemode;
    pub mod sweepschedule;
    pub mod overlapseries;
    pub mod engine;
    pub mod sweepdriver;
}

pub mod sink {
    pub mod visualizationsink;
    pub mod axisscale;
    pub mod recordingsink;
    pub mod tracingsink;
}
