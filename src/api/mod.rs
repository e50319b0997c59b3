pub mod blockstream;
