use core::ptr::addr_of_mut;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::RestoreState;
use embedded_io::Write;
use esp_hal::{uart::UartTx, Blocking};

static mut LOGGER: Option<UartTx<'static, Blocking>> = None;
static mut ENCODER: defmt::Encoder = defmt::Encoder::new();
static mut RESTORE: RestoreState = RestoreState::invalid();
static TAKEN: AtomicBool = AtomicBool::new(false);

pub fn init_logs(dbg_tx: UartTx<'static, Blocking>) {
    critical_section::with(|_| unsafe {
        *addr_of_mut!(LOGGER) = Some(dbg_tx);
    });
}

// Global defmt logger configuration
#[defmt::global_logger]
struct Logger;

impl Logger {
    // Only called between acquire() and release(), inside the critical section
    fn do_write(bytes: &[u8]) {
        unsafe {
            if let Some(logger) = (*addr_of_mut!(LOGGER)).as_mut() {
                // Nowhere to report a failing log port
                let _ = logger.write_all(bytes);
            }
        }
    }
}

unsafe impl defmt::Logger for Logger {
    fn acquire() {
        let restore = unsafe { critical_section::acquire() };

        if TAKEN.load(Ordering::Relaxed) {
            panic!("defmt logger taken reentrantly");
        }
        TAKEN.store(true, Ordering::Relaxed);

        unsafe {
            RESTORE = restore;
            (*addr_of_mut!(ENCODER)).start_frame(Logger::do_write);
        }
    }

    unsafe fn flush() {
        if let Some(logger) = (*addr_of_mut!(LOGGER)).as_mut() {
            let _ = logger.flush();
        }
    }

    unsafe fn release() {
        (*addr_of_mut!(ENCODER)).end_frame(Logger::do_write);

        TAKEN.store(false, Ordering::Relaxed);

        critical_section::release(RESTORE);
    }

    unsafe fn write(bytes: &[u8]) {
        (*addr_of_mut!(ENCODER)).write(bytes, Logger::do_write);
    }
}
