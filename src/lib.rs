/*

aperiodic tilings by recursive substitution: 2D Penrose rhombus
patterns and 3D icosahedral quasi-crystals.

this crate is the growth engine only. rendering, solid modeling and
voxelization live elsewhere and just consume the face/beam geometry
produced here.

 */

//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

#[macro_use]
extern crate error_chain;

pub mod errors {

    use crate::face::ConnectorType;

    error_chain! {

        foreign_links {
            Io(::std::io::Error);
            ParseInt(::std::num::ParseIntError);
            ParseFloat(::std::num::ParseFloatError);
        }

        errors {

            GenerationNotFound(requested: usize, available: usize) {
                description("generation not found")
                display("generation {:} not found ({:} generations built)",
                        requested, available)
            }

            SourceFaceIndex(index: usize, count: usize) {
                description("face index out of range on attaching tile")
                display("face index {:} out of range on attaching tile ({:} faces)",
                        index, count)
            }

            TargetFaceIndex(index: usize, count: usize) {
                description("face index out of range on target tile")
                display("face index {:} out of range on target tile ({:} faces)",
                        index, count)
            }

            ConnectorMismatch(source: ConnectorType, target: ConnectorType) {
                description("connector types do not match")
                display("cannot attach {:} connector onto {:} connector",
                        source, target)
            }

            ChiralFlip(connector: ConnectorType) {
                description("flip orientation requested on chiral connector")
                display("flipped attach orientation requested for chiral {:} connector",
                        connector)
            }

            UnsupportedConnector(index: usize) {
                description("connector outside the fixed rule set")
                display("no substitution rules for connector discriminant {:}",
                        index)
            }

            BadParameter(name: &'static str, value: f64) {
                description("parameter must be positive")
                display("parameter {:} must be positive (got {:})",
                        name, value)
            }

        }

    }

}

pub mod frame;
pub mod face;
pub mod penrose;
pub mod tile;
pub mod inflate;
pub mod crystal;

//////////////////////////////////////////////////////////////////////
// define some constants for golden-ratio geometry

pub const PHI: f64 = 1.618033988749895;
pub const INVPHI: f64 = 0.618033988749895;

// cos of the golden rhombus corner angle at the long-diagonal ends,
// i.e. 1/sqrt(5); the angle itself is about 63.435 degrees

pub const INV_ROOT5: f64 = 0.4472135954999579;
pub const PSI_FACE: f64 = 1.1071487177940904;

pub const PI: f64 = std::f64::consts::PI;

//////////////////////////////////////////////////////////////////////
// pull in some types from nalgebra

pub type Vec2d = nalgebra::Vector2<f64>;
pub type Vec3d = nalgebra::Vector3<f64>;
pub type Point2d = nalgebra::geometry::Point2<f64>;
pub type Point3d = nalgebra::geometry::Point3<f64>;
pub type Rotation3d = nalgebra::Rotation3<f64>;
pub type Unit3d = nalgebra::Unit<Vec3d>;

//////////////////////////////////////////////////////////////////////
// fixed-precision rounding for dedup identity keys. dedup works on
// quantized integer keys rather than tolerance clustering.

// round to a fixed number of decimals
pub fn round_to(x: f64, decimals: i32) -> f64 {
    let s = 10f64.powi(decimals);
    (x * s).round() / s
}

// quantized integer key component for hashing
pub fn quantize(x: f64, decimals: i32) -> i64 {
    let s = 10f64.powi(decimals);
    (x * s).round() as i64
}

//////////////////////////////////////////////////////////////////////
