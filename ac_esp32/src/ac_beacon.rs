#![no_std]
#![no_main]

//! Button-free variant: resends the baseline command on the IR LED every
//! two seconds.

mod logging;
mod rmt_transmitter;

use ac_core::{CommandState, Remote, RemoteError, BEACON_PERIOD_MS};
use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::Timer;
use esp_backtrace as _;
use esp_hal::{
    gpio::Level,
    rmt::{Channel, Rmt, TxChannelConfig, TxChannelCreator},
    time::Rate,
    timer::timg::TimerGroup,
    uart::{self, Uart},
    Blocking,
};
use logging::init_logs;
use rmt_transmitter::RmtTransmitter;

esp_bootloader_esp_idf::esp_app_desc!();

const RMT_CLK_DIV: u8 = 80;

type IrChannel = Channel<Blocking, 0>;

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

    let rmt = Rmt::new(p.RMT, Rate::from_mhz(80)).unwrap();
    let ir_channel: IrChannel = rmt
        .channel0
        .configure_tx(
            p.GPIO18,
            TxChannelConfig::default()
                .with_clk_divider(RMT_CLK_DIV)
                .with_idle_output(true)
                .with_idle_output_level(Level::Low),
        )
        .unwrap();

    let mut remote = Remote::new(CommandState::init(), RmtTransmitter::new(ir_channel));

    loop {
        info!("sending command");

        match remote.send() {
            Ok(()) => {}
            Err(RemoteError::Timeline(e)) => {
                error!("frame needs {} items, buffer holds {}", e.needed, e.capacity)
            }
            Err(RemoteError::Transmit(e)) => error!("transmission failed: {}", e),
        }

        Timer::after_millis(BEACON_PERIOD_MS).await;
    }
}
