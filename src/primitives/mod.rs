pub mod efloat;
