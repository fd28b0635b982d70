#![no_std]
#![no_main]

//! Drives the air conditioner through a YS-IRTM module on UART2 instead of
//! an IR LED, repeating the power-on code.

mod logging;

use ac_core::ys_irtm::{self, NecCode, YsIrtm};
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_backtrace as _;
use esp_hal::{
    timer::timg::TimerGroup,
    uart::{self, Uart},
};
use logging::init_logs;

esp_bootloader_esp_idf::esp_app_desc!();

const SEND_PERIOD_MS: u64 = 1000;

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    let p = esp_hal::init(esp_hal::Config::default());

    let dbg_serial = Uart::new(p.UART0, uart::Config::default().with_baudrate(115200))
        .unwrap()
        .with_tx(p.GPIO1);
    let (_, dbg_tx) = dbg_serial.split();
    init_logs(dbg_tx);

    info!("Init!");

    let timg0 = TimerGroup::new(p.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    let irtm_serial = Uart::new(
        p.UART2,
        uart::Config::default().with_baudrate(ys_irtm::BAUDRATE),
    )
    .unwrap()
    .with_tx(p.GPIO17)
    .into_async();
    let mut irtm = YsIrtm::new(irtm_serial);

    loop {
        match irtm.send(NecCode::AC_POWER_ON).await {
            Ok(()) => info!("sent {}", NecCode::AC_POWER_ON),
            Err(e) => error!("YS-IRTM write failed: {:?}", e),
        }

        Timer::after_millis(SEND_PERIOD_MS).await;
    }
}
