// ============================================================
// Layer 5 — Backend / Device Selection
// ============================================================
// Picks the Burn backend and device for the run:
//
//   --no-cuda          → CPU (NdArray)
//   accelerator wanted → Wgpu on DiscreteGpu(--gpu), when the
//                        crate is built with `--features wgpu`
//                      → CPU otherwise, with a warning
//
// The model itself is generic over the backend, so this is the
// only place that names concrete backend types.

use anyhow::Result;
use burn::prelude::*;

use crate::application::bootstrap_use_case::{BootstrapReport, BootstrapUseCase, TrainConfig};
use crate::ml::factory::BurnModelFactory;

pub type CpuBackend = burn::backend::NdArray<f32>;

#[cfg(feature = "wgpu")]
pub type GpuBackend = burn::backend::Wgpu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(not(feature = "wgpu"), allow(dead_code))]
pub enum DeviceChoice {
    Cpu,
    /// Accelerator device index.
    Gpu(usize),
}

/// Whether this build carries an accelerator backend.
pub const fn accelerator_compiled() -> bool {
    cfg!(feature = "wgpu")
}

/// Decide where the model should live for this configuration.
pub fn select_device(cfg: &TrainConfig) -> DeviceChoice {
    if !cfg.wants_accelerator() {
        tracing::info!("Accelerator disabled with --no-cuda, using CPU");
        return DeviceChoice::Cpu;
    }
    if !accelerator_compiled() {
        tracing::warn!(
            "Accelerator {} requested but this build has no GPU backend \
             (rebuild with --features wgpu); falling back to CPU",
            cfg.gpu,
        );
        return DeviceChoice::Cpu;
    }
    DeviceChoice::Gpu(cfg.gpu)
}

/// Run the bootstrap use case on the backend picked by `select_device`.
pub fn run_bootstrap(cfg: TrainConfig) -> Result<BootstrapReport> {
    match select_device(&cfg) {
        DeviceChoice::Cpu => {
            let device = burn::backend::ndarray::NdArrayDevice::Cpu;
            run_on::<CpuBackend>(cfg, device)
        }
        #[cfg(feature = "wgpu")]
        DeviceChoice::Gpu(index) => {
            let device = burn::backend::wgpu::WgpuDevice::DiscreteGpu(index);
            tracing::info!("Using WGPU device: {:?}", device);
            run_on::<GpuBackend>(cfg, device)
        }
        #[cfg(not(feature = "wgpu"))]
        DeviceChoice::Gpu(index) => {
            anyhow::bail!("GPU {index} selected but the wgpu backend is not compiled in")
        }
    }
}

fn run_on<B: Backend>(cfg: TrainConfig, device: B::Device) -> Result<BootstrapReport> {
    BootstrapUseCase::new(cfg, BurnModelFactory::<B>::new(device)).execute()
}
