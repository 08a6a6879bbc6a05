//! Counting doubles of the ACPI runtime and the HID-over-I2C core.
//!
//! Both doubles write to one shared journal so tests can check the order in
//! which the driver talks to firmware and to the core.

use std::boxed::Box;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec;
use std::vec::Vec;

use hadron_acpi::dsm::DsmRequest;
use hadron_acpi::{
    AcpiError, AcpiHandle, AcpiObject, AcpiRuntime, DevicePowerState, FadtFlags, Guid, HardwareId,
};
use hadron_driver_api::{DriverError, DriverServices, I2cClient, I2cHidCore, I2cHidSubclass};

/// Companion handle used by [`client`].
pub const COMPANION: AcpiHandle = AcpiHandle::new(0x5c);

/// Ordered record of firmware and core calls.
pub type Journal = Arc<Mutex<Vec<&'static str>>>;

/// Builds a client described by firmware through [`COMPANION`].
pub fn client() -> Arc<I2cClient> {
    Arc::new(I2cClient::new("i2c-ELAN0001:00", 0x15).with_acpi_companion(COMPANION))
}

/// Builds a client with no ACPI companion.
pub fn bare_client(name: &str) -> Arc<I2cClient> {
    Arc::new(I2cClient::new(name, 0x2c))
}

// ── ACPI runtime ───────────────────────────────────────────────────────

/// What the mock saw in a `_DSM` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenDsm {
    pub handle: AcpiHandle,
    pub guid: Guid,
    pub revision: u64,
    pub function: u64,
    pub has_args: bool,
}

pub struct MockAcpi {
    journal: Journal,
    ids: Result<Vec<HardwareId>, AcpiError>,
    dsm: Result<Option<AcpiObject>, AcpiError>,
    fadt: FadtFlags,
    set_power: Result<(), AcpiError>,
    dsm_calls: AtomicUsize,
    produced: AtomicUsize,
    freed: AtomicUsize,
    fix_ups: AtomicUsize,
    last_dsm: Mutex<Option<SeenDsm>>,
    power: Mutex<Vec<(AcpiHandle, DevicePowerState)>>,
}

impl MockAcpi {
    fn new(journal: Journal) -> Self {
        Self {
            journal,
            ids: Ok(vec![HardwareId::string("ELAN0001"), HardwareId::eisa("PNP0C50")]),
            dsm: Ok(Some(AcpiObject::Integer(0x0001))),
            fadt: FadtFlags::empty(),
            set_power: Ok(()),
            dsm_calls: AtomicUsize::new(0),
            produced: AtomicUsize::new(0),
            freed: AtomicUsize::new(0),
            fix_ups: AtomicUsize::new(0),
            last_dsm: Mutex::new(None),
            power: Mutex::new(Vec::new()),
        }
    }

    fn log(&self, event: &'static str) {
        self.journal.lock().unwrap().push(event);
    }

    pub fn dsm_calls(&self) -> usize {
        self.dsm_calls.load(Ordering::SeqCst)
    }

    /// Objects handed out minus objects handed back.
    pub fn outstanding(&self) -> usize {
        self.produced.load(Ordering::SeqCst) - self.freed.load(Ordering::SeqCst)
    }

    pub fn freed(&self) -> usize {
        self.freed.load(Ordering::SeqCst)
    }

    pub fn fix_ups(&self) -> usize {
        self.fix_ups.load(Ordering::SeqCst)
    }

    pub fn last_dsm(&self) -> Option<SeenDsm> {
        *self.last_dsm.lock().unwrap()
    }

    pub fn power_transitions(&self) -> Vec<(AcpiHandle, DevicePowerState)> {
        self.power.lock().unwrap().clone()
    }
}

impl AcpiRuntime for MockAcpi {
    fn device_ids(&self, handle: AcpiHandle) -> Result<Vec<HardwareId>, AcpiError> {
        self.log("acpi.device_ids");
        if handle != COMPANION {
            return Err(AcpiError::InvalidHandle);
        }
        self.ids.clone()
    }

    fn evaluate_dsm(
        &self,
        handle: AcpiHandle,
        request: &DsmRequest<'_>,
    ) -> Result<Option<AcpiObject>, AcpiError> {
        self.log("acpi.evaluate_dsm");
        self.dsm_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_dsm.lock().unwrap() = Some(SeenDsm {
            handle,
            guid: *request.guid,
            revision: request.revision,
            function: request.function,
            has_args: request.args.is_some(),
        });
        let result = self.dsm.clone();
        if let Ok(Some(_)) = result {
            self.produced.fetch_add(1, Ordering::SeqCst);
        }
        result
    }

    fn free_object(&self, _object: AcpiObject) {
        self.log("acpi.free_object");
        self.freed.fetch_add(1, Ordering::SeqCst);
    }

    fn fix_up_power(&self, handle: AcpiHandle) {
        assert_eq!(handle, COMPANION);
        self.log("acpi.fix_up_power");
        self.fix_ups.fetch_add(1, Ordering::SeqCst);
    }

    fn set_power(&self, handle: AcpiHandle, state: DevicePowerState) -> Result<(), AcpiError> {
        self.log("acpi.set_power");
        self.power.lock().unwrap().push((handle, state));
        self.set_power
    }

    fn fadt_flags(&self) -> FadtFlags {
        self.fadt
    }
}

// ── HID-over-I2C core ──────────────────────────────────────────────────

pub struct MockCore {
    journal: Journal,
    probe: Result<(), DriverError>,
    shutdown: Result<(), DriverError>,
    probed_addresses: Mutex<Vec<u16>>,
    subclass: Mutex<Option<Arc<dyn I2cHidSubclass>>>,
}

impl MockCore {
    fn new(journal: Journal) -> Self {
        Self {
            journal,
            probe: Ok(()),
            shutdown: Ok(()),
            probed_addresses: Mutex::new(Vec::new()),
            subclass: Mutex::new(None),
        }
    }

    fn log(&self, event: &'static str) {
        self.journal.lock().unwrap().push(event);
    }

    pub fn probed_addresses(&self) -> Vec<u16> {
        self.probed_addresses.lock().unwrap().clone()
    }

    /// The subclass object handed over by the last probe.
    pub fn subclass(&self) -> Option<Arc<dyn I2cHidSubclass>> {
        self.subclass.lock().unwrap().clone()
    }
}

impl I2cHidCore for MockCore {
    fn probe(
        &self,
        _client: &Arc<I2cClient>,
        subclass: Arc<dyn I2cHidSubclass>,
        hid_descriptor_address: u16,
    ) -> Result<(), DriverError> {
        self.log("core.probe");
        self.probed_addresses
            .lock()
            .unwrap()
            .push(hid_descriptor_address);
        *self.subclass.lock().unwrap() = Some(subclass);
        self.probe
    }

    fn remove(&self, _client: &I2cClient) -> Result<(), DriverError> {
        self.log("core.remove");
        self.subclass.lock().unwrap().take();
        Ok(())
    }

    fn shutdown(&self, _client: &I2cClient) -> Result<(), DriverError> {
        self.log("core.shutdown");
        self.shutdown
    }

    fn suspend(&self, _client: &I2cClient) -> Result<(), DriverError> {
        self.log("core.suspend");
        Ok(())
    }

    fn resume(&self, _client: &I2cClient) -> Result<(), DriverError> {
        self.log("core.resume");
        Ok(())
    }
}

// ── Services ───────────────────────────────────────────────────────────

/// Kernel services backed by [`MockAcpi`] and [`MockCore`].
///
/// Defaults describe a well-behaved HID device: `_HID` `ELAN0001`, `_CID`
/// `PNP0C50`, descriptor register `0x0001`, no low-power S0.
pub struct MockServices {
    pub acpi: MockAcpi,
    pub core: MockCore,
    journal: Journal,
}

impl MockServices {
    pub fn new() -> Self {
        let journal = Journal::default();
        Self {
            acpi: MockAcpi::new(journal.clone()),
            core: MockCore::new(journal.clone()),
            journal,
        }
    }

    pub fn ids(mut self, ids: Result<Vec<HardwareId>, AcpiError>) -> Self {
        self.acpi.ids = ids;
        self
    }

    pub fn dsm(mut self, dsm: Result<Option<AcpiObject>, AcpiError>) -> Self {
        self.acpi.dsm = dsm;
        self
    }

    pub fn fadt(mut self, flags: FadtFlags) -> Self {
        self.acpi.fadt = flags;
        self
    }

    pub fn set_power(mut self, result: Result<(), AcpiError>) -> Self {
        self.acpi.set_power = result;
        self
    }

    pub fn core_probe(mut self, result: Result<(), DriverError>) -> Self {
        self.core.probe = result;
        self
    }

    pub fn core_shutdown(mut self, result: Result<(), DriverError>) -> Self {
        self.core.shutdown = result;
        self
    }

    /// Leaks the services so they can be passed as `&'static dyn DriverServices`.
    pub fn leak(self) -> &'static Self {
        Box::leak(Box::new(self))
    }

    pub fn journal(&self) -> Vec<&'static str> {
        self.journal.lock().unwrap().clone()
    }
}

impl DriverServices for MockServices {
    fn acpi(&self) -> &dyn AcpiRuntime {
        &self.acpi
    }

    fn i2c_hid_core(&self) -> &dyn I2cHidCore {
        &self.core
    }
}
