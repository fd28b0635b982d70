#[macro_export]
macro_rules! core_run {
    ($core_instance:ident) => {
        // Unpack the board
        let (transmitter, buttons) = $core_instance.bsp.split();

        // The remote task is the only owner of the command state
        let remote = Remote::new(CommandState::init(), transmitter);

        static ACTION_CHANNEL: ActionChannel = ActionChannel::new();

        // Spawn tasks
        $core_instance
            .spawner
            .spawn(input_task(buttons, ACTION_CHANNEL.sender()))
            .unwrap();
        $core_instance
            .spawner
            .spawn(remote_task(remote, ACTION_CHANNEL.receiver()))
            .unwrap();
    };
}

#[macro_export]
macro_rules! core_create_tasks {
    ($TransmitterType:ty, $PinType:ty) => {
        #[embassy_executor::task]
        async fn input_task(buttons: ButtonPad<$PinType>, channel_out: ActionSender) {
            Core::<$TransmitterType, $PinType>::input_task(buttons, channel_out).await;
        }

        #[embassy_executor::task]
        async fn remote_task(remote: Remote<$TransmitterType>, channel_in: ActionReceiver) {
            Core::<$TransmitterType, $PinType>::remote_task(remote, channel_in).await;
        }
    };
}
