#![no_std]
#![no_main]

mod logging;
mod rmt_transmitter;

use ac_core::*;
use defmt::info;
use embassy_executor::Spawner;
use esp_backtrace as _;
use esp_hal::{
    gpio::{Input, InputConfig, Level, Pull},
    rmt::{Channel, Rmt, TxChannelConfig, TxChannelCreator},
    time::Rate,
    timer::timg::TimerGroup,
    uart::{self, Uart},
    Blocking,
};
use logging::init_logs;
use rmt_transmitter::RmtTransmitter;

esp_bootloader_esp_idf::esp_app_desc!();

// 80 MHz APB / 80 = one tick per microsecond
const RMT_CLK_DIV: u8 = 80;

type IrChannel = Channel<Blocking, 0>;

#[esp_hal_embassy::main]
async fn main(spawner: Spawner) {
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
    let transmitter = RmtTransmitter::new(ir_channel);

    info!("IR LED on GPIO18");

    let button_config = InputConfig::default().with_pull(Pull::Up);
    let buttons = [
        Input::new(p.GPIO25, button_config),
        Input::new(p.GPIO26, button_config),
        Input::new(p.GPIO27, button_config),
        Input::new(p.GPIO14, button_config),
    ];

    let bsp = Bsp::new_with_pins(transmitter, buttons);
    let core = Core::new(spawner, bsp);

    core_run!(core);
}

core_create_tasks!(RmtTransmitter<IrChannel>, Input<'static>);
